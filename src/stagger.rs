pub const SKILL_ITEM_STEP_SECONDS: f64 = 0.05;
pub const TECH_ICON_STEP_SECONDS: f64 = 0.3;

/// Inline `animation-delay` for the `index`-th item of a staggered group.
pub fn animation_delay(index: usize, step_seconds: f64) -> String {
    let seconds = index as f64 * step_seconds;
    format!("animation-delay: {seconds:.2}s;")
}

pub fn play_state(paused: bool) -> &'static str {
    if paused {
        "animation-play-state: paused;"
    } else {
        "animation-play-state: running;"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_with_index() {
        assert_eq!(animation_delay(0, SKILL_ITEM_STEP_SECONDS), "animation-delay: 0.00s;");
        assert_eq!(animation_delay(3, SKILL_ITEM_STEP_SECONDS), "animation-delay: 0.15s;");
        assert_eq!(animation_delay(2, TECH_ICON_STEP_SECONDS), "animation-delay: 0.60s;");
    }

    #[test]
    fn hover_pauses_animation() {
        assert_eq!(play_state(true), "animation-play-state: paused;");
        assert_eq!(play_state(false), "animation-play-state: running;");
    }
}
