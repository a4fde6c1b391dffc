use crate::{
    error::{PodiumError, PodiumResult},
    model::{Tier, Winner},
};

/// One unit of paginated showcase content.
///
/// The page sequence is `[Summary, tier-1 pages.., tier-2 pages.., ..]`;
/// tiers with no winners emit no pages.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Summary,
    Winners {
        tier: Tier,
        winners: Vec<Winner>,
        /// 1-based position within this tier's pages.
        page_in_tier: u32,
        total_pages_in_tier: u32,
    },
}

impl Page {
    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary)
    }
}

/// Partition `winners` into the ordered page sequence.
///
/// Within a tier the input order is preserved and each page holds at most
/// `max_per_page` winners; only the last page of a tier may hold fewer.
/// Deterministic and pure: the output is freshly allocated on every call.
pub fn plan_pages(winners: &[Winner], max_per_page: usize) -> PodiumResult<Vec<Page>> {
    if max_per_page == 0 {
        return Err(PodiumError::config("max_per_page must be > 0"));
    }

    let mut pages = vec![Page::Summary];

    for tier in Tier::ALL {
        let tier_winners: Vec<&Winner> = winners.iter().filter(|w| w.tier == tier).collect();
        if tier_winners.is_empty() {
            continue;
        }

        let total = tier_winners.len().div_ceil(max_per_page) as u32;
        for (idx, chunk) in tier_winners.chunks(max_per_page).enumerate() {
            pages.push(Page::Winners {
                tier,
                winners: chunk.iter().map(|w| (*w).clone()).collect(),
                page_in_tier: idx as u32 + 1,
                total_pages_in_tier: total,
            });
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winner(id: u64, tier: u8) -> Winner {
        Winner {
            id,
            handle: format!("w{id}"),
            tier: Tier::try_from(tier).unwrap(),
            prize: "$100".to_string(),
            avatar: String::new(),
            awards: vec![],
        }
    }

    #[test]
    fn empty_input_is_summary_only() {
        let pages = plan_pages(&[], 5).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_summary());
    }

    #[test]
    fn zero_capacity_is_a_config_error() {
        assert!(matches!(
            plan_pages(&[winner(1, 1)], 0),
            Err(PodiumError::Config(_))
        ));
    }

    #[test]
    fn tiers_group_in_rank_order_without_empty_pages() {
        // 3 in tier 1, 4 in tier 2, none in tiers 3/4.
        let winners: Vec<Winner> = [1u8, 1, 1, 2, 2, 2, 2]
            .iter()
            .enumerate()
            .map(|(i, t)| winner(i as u64, *t))
            .collect();

        let pages = plan_pages(&winners, 5).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages[0].is_summary());

        let Page::Winners {
            tier,
            winners: w1,
            page_in_tier,
            total_pages_in_tier,
        } = &pages[1]
        else {
            panic!("expected winners page");
        };
        assert_eq!(*tier, Tier::Excellence);
        assert_eq!(w1.iter().map(|w| w.id).collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!((*page_in_tier, *total_pages_in_tier), (1, 1));

        let Page::Winners { tier, winners: w2, .. } = &pages[2] else {
            panic!("expected winners page");
        };
        assert_eq!(*tier, Tier::Strategic);
        assert_eq!(w2.iter().map(|w| w.id).collect::<Vec<_>>(), [3, 4, 5, 6]);
    }

    #[test]
    fn overflowing_tier_chunks_with_short_last_page() {
        let winners: Vec<Winner> = (0..12).map(|i| winner(i, 3)).collect();
        let pages = plan_pages(&winners, 5).unwrap();

        // Summary + 3 pages of sizes 5, 5, 2.
        assert_eq!(pages.len(), 4);
        let sizes: Vec<usize> = pages[1..]
            .iter()
            .map(|p| match p {
                Page::Winners { winners, .. } => winners.len(),
                Page::Summary => panic!("unexpected summary"),
            })
            .collect();
        assert_eq!(sizes, [5, 5, 2]);

        for (i, page) in pages[1..].iter().enumerate() {
            let Page::Winners {
                page_in_tier,
                total_pages_in_tier,
                ..
            } = page
            else {
                unreachable!();
            };
            assert_eq!(*page_in_tier, i as u32 + 1);
            assert_eq!(*total_pages_in_tier, 3);
        }
    }

    #[test]
    fn tier_pages_concatenate_to_input_subsequence() {
        let tiers = [2u8, 1, 3, 1, 2, 1, 4, 2, 1, 1];
        let winners: Vec<Winner> = tiers
            .iter()
            .enumerate()
            .map(|(i, t)| winner(i as u64, *t))
            .collect();

        let pages = plan_pages(&winners, 2).unwrap();
        for tier in Tier::ALL {
            let from_pages: Vec<u64> = pages
                .iter()
                .filter_map(|p| match p {
                    Page::Winners { tier: t, winners, .. } if *t == tier => Some(winners),
                    _ => None,
                })
                .flatten()
                .map(|w| w.id)
                .collect();
            let from_input: Vec<u64> = winners
                .iter()
                .filter(|w| w.tier == tier)
                .map(|w| w.id)
                .collect();
            assert_eq!(from_pages, from_input);
        }
    }

    #[test]
    fn plan_is_deterministic() {
        let winners: Vec<Winner> = (0..9).map(|i| winner(i, (i % 4 + 1) as u8)).collect();
        let a = serde_json::to_string(&plan_pages(&winners, 4).unwrap()).unwrap();
        let b = serde_json::to_string(&plan_pages(&winners, 4).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
