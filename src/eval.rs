use crate::{
    anim::{CountUp, Spring, format_grouped, ramp},
    core::{Fps, FrameIndex},
    error::PodiumResult,
    model::{Tier, prize_pool_display},
    paginate::Page,
    showcase::Showcase,
    timeline::SceneCursor,
};

// Entrance curves of the broadcast composition.
const TITLE_SPRING: Spring = Spring::new(100.0, 20.0, 1.0);
const TILE_SPRING: Spring = Spring::new(100.0, 20.0, 0.5);
const FIGURE_SPRING: Spring = Spring::new(80.0, 30.0, 0.5);
const CARD_SPRING: Spring = Spring::new(80.0, 15.0, 0.6);

const TILE_FADE_FRAMES: u64 = 8;
const CARD_FADE_FRAMES: u64 = 10;
const TITLE_LIFT_PX: f64 = 20.0;

const HALO_DEG_PER_FRAME: u64 = 6;
const HALO_INDEX_STEP_DEG: u64 = 45;

/// Everything the renderer needs to draw one frame, as plain data.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneFrame {
    pub frame: FrameIndex,
    pub cursor: SceneCursor,
    pub header: SceneHeader,
    pub content: SceneContent,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneHeader {
    pub title: String,
    pub tagline: String,
    /// `"(p/n)"` when the current tier spans multiple pages.
    pub indicator: Option<String>,
    pub enter: EnterPhase,
    /// Upward settle of the header block, in pixels.
    pub lift_px: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneContent {
    Summary {
        stats: Vec<StatTile>,
    },
    Winners {
        tier: Tier,
        page_in_tier: u32,
        total_pages_in_tier: u32,
        cards: Vec<WinnerCard>,
    },
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct StatTile {
    pub label: String,
    /// Current count-up text, separators and any prefix/suffix included.
    pub display: String,
    pub enter: EnterPhase,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct WinnerCard {
    pub handle: String,
    pub prize: String,
    pub avatar: String,
    pub awards: Vec<String>,
    pub enter: EnterPhase,
    /// Rotation of the avatar ring, driven by the global frame so it never
    /// resets on page boundaries.
    pub halo_angle_deg: f64,
}

/// Entrance phase of one element: fade plus spring-driven scale.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct EnterPhase {
    pub opacity: f64,
    pub scale: f64,
}

pub struct Evaluator;

impl Evaluator {
    /// Evaluate the scene at a global frame.
    ///
    /// Pure: identical `(showcase, frame)` inputs produce identical output,
    /// and no playback state survives between calls.
    #[tracing::instrument(skip(show))]
    pub fn eval_frame(show: &Showcase, frame: FrameIndex) -> PodiumResult<SceneFrame> {
        let cursor = show.locate(frame)?;
        let page = &show.pages()[cursor.page];
        let local = cursor.local;
        let fps = show.fps();

        let header = match page {
            Page::Summary => header_for(&show.copy().summary, None, local, fps),
            Page::Winners {
                tier,
                page_in_tier,
                total_pages_in_tier,
                ..
            } => {
                let indicator = (*total_pages_in_tier > 1)
                    .then(|| format!("({page_in_tier}/{total_pages_in_tier})"));
                header_for(show.copy().for_tier(*tier), indicator, local, fps)
            }
        };

        let content = match page {
            Page::Summary => SceneContent::Summary {
                stats: summary_stats(show, local),
            },
            Page::Winners {
                tier,
                winners,
                page_in_tier,
                total_pages_in_tier,
            } => SceneContent::Winners {
                tier: *tier,
                page_in_tier: *page_in_tier,
                total_pages_in_tier: *total_pages_in_tier,
                cards: winners
                    .iter()
                    .enumerate()
                    .map(|(i, w)| WinnerCard {
                        handle: w.handle.clone(),
                        prize: w.prize.clone(),
                        avatar: w.avatar.clone(),
                        awards: w.awards.clone(),
                        enter: EnterPhase {
                            opacity: ramp(local, 0, CARD_FADE_FRAMES),
                            scale: 0.7 + 0.3 * CARD_SPRING.progress(local, fps),
                        },
                        halo_angle_deg: ((frame.0 * HALO_DEG_PER_FRAME
                            + i as u64 * HALO_INDEX_STEP_DEG)
                            % 360) as f64,
                    })
                    .collect(),
            },
        };

        Ok(SceneFrame {
            frame,
            cursor,
            header,
            content,
        })
    }
}

fn header_for(
    copy: &crate::model::SceneCopy,
    indicator: Option<String>,
    local: FrameIndex,
    fps: Fps,
) -> SceneHeader {
    let p = TITLE_SPRING.progress(local, fps).clamp(0.0, 1.0);
    SceneHeader {
        title: copy.title.clone(),
        tagline: copy.tagline.clone(),
        indicator,
        enter: EnterPhase {
            opacity: p,
            scale: 1.0,
        },
        lift_px: (1.0 - p) * TITLE_LIFT_PX,
    }
}

fn summary_stats(show: &Showcase, local: FrameIndex) -> Vec<StatTile> {
    let fps = show.fps();
    let enter = EnterPhase {
        opacity: ramp(local, 0, TILE_FADE_FRAMES),
        scale: 0.8 + 0.2 * TILE_SPRING.progress(local, fps),
    };

    let mut stats = vec![
        StatTile {
            label: "Winners".to_string(),
            display: CountUp::new(show.roster().len() as u64, FIGURE_SPRING)
                .display_at(local, fps),
            enter,
        },
        StatTile {
            label: "Prize Pool".to_string(),
            display: animated_figure(
                &prize_pool_display(show.roster().total_prize_usd()),
                local,
                fps,
            ),
            enter,
        },
    ];

    if let Some(submissions) = show.facts().submissions {
        stats.push(StatTile {
            label: "Submissions".to_string(),
            display: CountUp::new(submissions, FIGURE_SPRING).display_at(local, fps),
            enter,
        });
    }
    if let Some(regions) = &show.facts().regions {
        stats.push(StatTile {
            label: "Regions".to_string(),
            display: animated_figure(regions, local, fps),
            enter,
        });
    }

    stats
}

/// Count up the first digit run in a display figure, keeping any prefix and
/// suffix: `"$42k"` renders `"$0k"`, `"$17k"`, .. `"$42k"` as the spring
/// settles. Figures with no digits pass through unchanged.
fn animated_figure(display: &str, local: FrameIndex, fps: Fps) -> String {
    let Some((prefix, target, suffix)) = split_figure(display) else {
        return display.to_string();
    };
    let current = CountUp::new(target, FIGURE_SPRING).value_at(local, fps);
    format!("{prefix}{}{suffix}", format_grouped(current))
}

fn split_figure(display: &str) -> Option<(&str, u64, &str)> {
    let start = display.find(|c: char| c.is_ascii_digit())?;
    let run = display[start..]
        .find(|c: char| !c.is_ascii_digit() && c != ',')
        .map_or(display.len(), |o| start + o);
    let digits: String = display[start..run].chars().filter(|c| *c != ',').collect();
    let target = digits.parse().ok()?;
    Some((&display[..start], target, &display[run..]))
}
