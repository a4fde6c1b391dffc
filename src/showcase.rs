use crate::{
    core::{Fps, FrameIndex},
    error::{PodiumError, PodiumResult},
    model::{Roster, ShowcaseCopy},
    paginate::{Page, plan_pages},
    timeline::{SceneCursor, locate, total_frames},
};

/// Summary-scene statistics the roster cannot derive (campaign-level inputs).
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SummaryFacts {
    /// Total submissions over the season, shown as a count-up tile.
    pub submissions: Option<u64>,
    /// Region coverage label, e.g. `"15+"`.
    pub regions: Option<String>,
}

/// A fully planned showcase: roster, timing parameters and the derived page
/// sequence.
///
/// Pages are planned once at build time; everything else is recomputed per
/// frame from the global counter, so there is no playback state to carry
/// between calls.
#[derive(Clone, Debug)]
pub struct Showcase {
    fps: Fps,
    scene_frames: u64,
    max_per_page: usize,
    roster: Roster,
    copy: ShowcaseCopy,
    facts: SummaryFacts,
    pages: Vec<Page>,
}

impl Showcase {
    pub fn builder(fps: Fps) -> ShowcaseBuilder {
        ShowcaseBuilder::new(fps)
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn scene_frames(&self) -> u64 {
        self.scene_frames
    }

    pub fn max_per_page(&self) -> usize {
        self.max_per_page
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn copy(&self) -> &ShowcaseCopy {
        &self.copy
    }

    pub fn facts(&self) -> &SummaryFacts {
        &self.facts
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Overall duration in frames (`page_count * scene_frames`).
    pub fn duration(&self) -> FrameIndex {
        FrameIndex(total_frames(self.page_count(), self.scene_frames))
    }

    /// Map a global frame to the current page and local scene frame.
    pub fn locate(&self, frame: FrameIndex) -> PodiumResult<SceneCursor> {
        locate(frame, self.scene_frames, self.page_count())
    }
}

/// Builder for [`Showcase`]. Defaults follow the broadcast composition:
/// 4-second scenes and at most 5 winners per page.
pub struct ShowcaseBuilder {
    fps: Fps,
    scene_frames: u64,
    max_per_page: usize,
    roster: Roster,
    copy: ShowcaseCopy,
    facts: SummaryFacts,
}

impl ShowcaseBuilder {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            scene_frames: fps.secs_to_frames_floor(4.0),
            max_per_page: 5,
            roster: Roster::default(),
            copy: ShowcaseCopy::default(),
            facts: SummaryFacts::default(),
        }
    }

    pub fn scene_frames(mut self, frames: u64) -> Self {
        self.scene_frames = frames;
        self
    }

    pub fn scene_secs(mut self, secs: f64) -> Self {
        self.scene_frames = self.fps.secs_to_frames_floor(secs);
        self
    }

    pub fn max_per_page(mut self, n: usize) -> Self {
        self.max_per_page = n;
        self
    }

    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn copy(mut self, copy: ShowcaseCopy) -> Self {
        self.copy = copy;
        self
    }

    pub fn facts(mut self, facts: SummaryFacts) -> Self {
        self.facts = facts;
        self
    }

    /// Validate the configuration and plan the page sequence.
    ///
    /// Host misconfiguration (zero scene length or page capacity) fails here,
    /// never during per-frame evaluation.
    pub fn build(self) -> PodiumResult<Showcase> {
        if self.scene_frames == 0 {
            return Err(PodiumError::config("scene_frames must be > 0"));
        }
        if self.max_per_page == 0 {
            return Err(PodiumError::config("max_per_page must be > 0"));
        }
        self.roster.validate()?;

        let pages = plan_pages(&self.roster.winners, self.max_per_page)?;
        Ok(Showcase {
            fps: self.fps,
            scene_frames: self.scene_frames,
            max_per_page: self.max_per_page,
            roster: self.roster,
            copy: self.copy,
            facts: self.facts,
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Tier, Winner};

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

    fn fps30() -> Fps {
        Fps::new(30, 1).unwrap()
    }

    #[test]
    fn defaults_match_the_broadcast_composition() {
        let show = Showcase::builder(fps30()).build().unwrap();
        assert_eq!(show.scene_frames(), 120);
        assert_eq!(show.max_per_page(), 5);
        assert_eq!(show.page_count(), 1); // empty roster plans [Summary]
        assert_eq!(show.duration().0, 120);
    }

    #[test]
    fn duration_scales_with_planned_pages() {
        let roster = Roster::new((0..12).map(|i| winner(i, 3)).collect());
        let show = Showcase::builder(fps30()).roster(roster).build().unwrap();
        // Summary + ceil(12/5) pages.
        assert_eq!(show.page_count(), 4);
        assert_eq!(show.duration().0, 480);
    }

    #[test]
    fn locate_delegates_with_built_page_count() {
        let roster = Roster::new((0..12).map(|i| winner(i, 3)).collect());
        let show = Showcase::builder(fps30()).roster(roster).build().unwrap();
        let cursor = show.locate(FrameIndex(500)).unwrap();
        assert_eq!((cursor.page, cursor.local.0), (3, 20));
    }

    #[test]
    fn build_rejects_bad_timing() {
        assert!(Showcase::builder(fps30()).scene_frames(0).build().is_err());
        assert!(Showcase::builder(fps30()).max_per_page(0).build().is_err());
    }

    #[test]
    fn build_rejects_invalid_roster() {
        let roster = Roster::new(vec![winner(1, 1), winner(1, 2)]);
        assert!(Showcase::builder(fps30()).roster(roster).build().is_err());
    }

    #[test]
    fn scene_secs_floors_to_frames() {
        let show = Showcase::builder(fps30()).scene_secs(2.5).build().unwrap();
        assert_eq!(show.scene_frames(), 75);
    }
}
