use crate::{
    core::FrameIndex,
    error::{PodiumError, PodiumResult},
};

/// Where a global frame lands on the page timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneCursor {
    /// Index into the planned page sequence.
    pub page: usize,
    /// Frame offset within the current scene, always `< scene_frames`.
    pub local: FrameIndex,
}

/// Map a global frame counter to the current page and local scene frame.
///
/// The page index clamps at the final page once the counter runs past the
/// timeline; the local frame keeps cycling modulo `scene_frames`, so the final
/// scene's animation replays on overrun rather than freezing.
pub fn locate(
    frame: FrameIndex,
    scene_frames: u64,
    page_count: usize,
) -> PodiumResult<SceneCursor> {
    if scene_frames == 0 {
        return Err(PodiumError::config("scene_frames must be > 0"));
    }
    if page_count == 0 {
        return Err(PodiumError::config("page_count must be > 0"));
    }

    let nominal = (frame.0 / scene_frames) as usize;
    Ok(SceneCursor {
        page: nominal.min(page_count - 1),
        local: FrameIndex(frame.0 % scene_frames),
    })
}

/// Overall timeline length in frames, for the host to size the composition.
pub fn total_frames(page_count: usize, scene_frames: u64) -> u64 {
    (page_count as u64) * scene_frames
}
