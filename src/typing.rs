//! Character-by-character typing for the hero title and the code window.
//!
//! Both animators are pure state machines. The host owns the timers: it
//! waits for the delay carried by [`Step::Wait`], then calls `tick` with
//! the token of the run it is driving. Starting a run bumps the
//! generation, so continuations of an older run come back as
//! [`Step::Stale`] and simply stop.

use crate::snippets::{Snippet, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    pub char_delay_ms: u32,
    pub newline_delay_ms: u32,
}

impl Cadence {
    pub const HERO: Self = Self::uniform(100);
    pub const CODE_WINDOW: Self = Self {
        char_delay_ms: 30,
        newline_delay_ms: 150,
    };
    pub const LEGACY_CODE_WINDOW: Self = Self {
        char_delay_ms: 50,
        newline_delay_ms: 200,
    };

    pub const fn uniform(delay_ms: u32) -> Self {
        Self {
            char_delay_ms: delay_ms,
            newline_delay_ms: delay_ms,
        }
    }

    /// Pause taken before `ch` appears.
    pub fn delay_before(self, ch: char) -> u32 {
        if ch == '\n' {
            self.newline_delay_ms
        } else {
            self.char_delay_ms
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Call `tick` again after this many milliseconds.
    Wait(u32),
    Done,
    /// The token belongs to a superseded or cancelled run.
    Stale,
}

/// Anything driven by [`Step::Wait`] timers and ticked with its run token.
pub trait Animator {
    fn tick(&mut self, token: RunToken) -> Step;
}

/// Plain-text typing: the hero title.
#[derive(Debug)]
pub struct Typewriter {
    cadence: Cadence,
    source: String,
    cursor: usize,
    generation: u64,
    running: bool,
}

impl Typewriter {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            source: String::new(),
            cursor: 0,
            generation: 0,
            running: false,
        }
    }

    /// Clears the output and begins typing `source`.
    pub fn start(&mut self, source: &str) -> (RunToken, Step) {
        self.generation = self.generation.wrapping_add(1);
        self.source = source.to_string();
        self.cursor = 0;
        self.running = true;

        (RunToken(self.generation), self.pending_step())
    }

    /// Like [`Typewriter::start`], but the first character is typed at once.
    pub fn start_eager(&mut self, source: &str) -> (RunToken, Step) {
        let (token, step) = self.start(source);
        match step {
            Step::Wait(_) => (token, self.tick(token)),
            step => (token, step),
        }
    }

    pub fn tick(&mut self, token: RunToken) -> Step {
        if !self.running || token.0 != self.generation {
            return Step::Stale;
        }

        let Some(ch) = self.next_char() else {
            self.running = false;
            return Step::Done;
        };
        self.cursor += ch.len_utf8();

        self.pending_step()
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.running = false;
    }

    pub fn rendered(&self) -> &str {
        &self.source[..self.cursor]
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn next_char(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    fn pending_step(&mut self) -> Step {
        match self.next_char() {
            Some(ch) => Step::Wait(self.cadence.delay_before(ch)),
            None => {
                self.running = false;
                Step::Done
            }
        }
    }
}

impl Animator for Typewriter {
    fn tick(&mut self, token: RunToken) -> Step {
        Typewriter::tick(self, token)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodeWindowProfile {
    /// Every snippet in turn, forever.
    #[default]
    Cycling,
    /// The first snippet once, at the slower cadence.
    Legacy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSettings {
    pub cadence: Cadence,
    pub hold_ms: u32,
    pub cycle: bool,
}

impl CodeWindowProfile {
    pub fn settings(self, hold_ms: u32) -> PlayerSettings {
        match self {
            Self::Cycling => PlayerSettings {
                cadence: Cadence::CODE_WINDOW,
                hold_ms,
                cycle: true,
            },
            Self::Legacy => PlayerSettings {
                cadence: Cadence::LEGACY_CODE_WINDOW,
                hold_ms,
                cycle: false,
            },
        }
    }

    pub fn playlist(self, snippets: &'static [Snippet]) -> &'static [Snippet] {
        match self {
            Self::Cycling => snippets,
            Self::Legacy => &snippets[..snippets.len().min(1)],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerPhase {
    Idle,
    Typing,
    Holding,
    Done,
}

/// Snippet-cycling typing: the hero code window.
#[derive(Debug)]
pub struct SnippetPlayer {
    playlist: &'static [Snippet],
    settings: PlayerSettings,
    index: usize,
    typed: usize,
    phase: PlayerPhase,
    generation: u64,
}

impl SnippetPlayer {
    pub fn new(playlist: &'static [Snippet], settings: PlayerSettings) -> Self {
        Self {
            playlist,
            settings,
            index: 0,
            typed: 0,
            phase: PlayerPhase::Idle,
            generation: 0,
        }
    }

    /// Restarts the current snippet from an empty code slot.
    pub fn start(&mut self) -> (RunToken, Step) {
        self.generation = self.generation.wrapping_add(1);
        self.typed = 0;

        let step = if self.playlist.is_empty() {
            self.phase = PlayerPhase::Done;
            Step::Done
        } else {
            self.phase = PlayerPhase::Typing;
            self.typing_step()
        };

        (RunToken(self.generation), step)
    }

    pub fn tick(&mut self, token: RunToken) -> Step {
        if token.0 != self.generation {
            return Step::Stale;
        }

        match self.phase {
            PlayerPhase::Typing => {
                self.typed += 1;
                self.typing_step()
            }
            PlayerPhase::Holding => {
                self.index = (self.index + 1) % self.playlist.len();
                self.typed = 0;
                self.phase = PlayerPhase::Typing;
                log::debug!("code window advanced to snippet {}", self.index);
                self.typing_step()
            }
            PlayerPhase::Idle | PlayerPhase::Done => Step::Stale,
        }
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.phase != PlayerPhase::Done {
            self.phase = PlayerPhase::Idle;
        }
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn title(&self) -> &'static str {
        self.current().map_or("", |snippet| snippet.title)
    }

    pub fn visible(&self) -> Vec<Token> {
        self.current()
            .map(|snippet| snippet.visible(self.typed))
            .unwrap_or_default()
    }

    fn current(&self) -> Option<&'static Snippet> {
        self.playlist.get(self.index)
    }

    fn typing_step(&mut self) -> Step {
        let next = self.current().and_then(|snippet| snippet.char_at(self.typed));
        match next {
            Some(ch) => Step::Wait(self.settings.cadence.delay_before(ch)),
            None if self.settings.cycle => {
                self.phase = PlayerPhase::Holding;
                Step::Wait(self.settings.hold_ms)
            }
            None => {
                self.phase = PlayerPhase::Done;
                Step::Done
            }
        }
    }
}

impl Animator for SnippetPlayer {
    fn tick(&mut self, token: RunToken) -> Step {
        SnippetPlayer::tick(self, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippets::TokenKind;
    use crate::test_support::Timeline;

    const TWO: &[Snippet] = &[
        Snippet {
            title: "first.rs",
            code: &[Token {
                kind: TokenKind::Keyword,
                text: "ab",
            }],
        },
        Snippet {
            title: "second.py",
            code: &[Token {
                kind: TokenKind::Plain,
                text: "c\n",
            }],
        },
    ];

    fn visible_text(player: &SnippetPlayer) -> String {
        player.visible().iter().map(|token| token.text).collect()
    }

    /// Runs `player` for `ticks` timer callbacks, recording (time, index, code) after each.
    fn drive(player: &mut SnippetPlayer, ticks: usize) -> Vec<(u64, usize, String)> {
        let mut timeline = Timeline::new();
        let (token, step) = player.start();
        if let Step::Wait(delay) = step {
            timeline.schedule(delay, token);
        }

        let mut log = Vec::new();
        while log.len() < ticks {
            let Some((at, token)) = timeline.next() else {
                break;
            };
            if let Step::Wait(delay) = player.tick(token) {
                timeline.schedule(delay, token);
            }
            log.push((at, player.index(), visible_text(player)));
        }
        log
    }

    #[test]
    fn hero_text_appears_one_char_per_interval_then_stops() {
        let mut typewriter = Typewriter::new(Cadence::HERO);
        let mut timeline = Timeline::new();
        let mut states = Vec::new();

        let (token, step) = typewriter.start("Hi");
        states.push((timeline.now(), typewriter.rendered().to_string()));
        assert_eq!(step, Step::Wait(100));
        timeline.schedule(100, token);

        while let Some((at, token)) = timeline.next() {
            let step = typewriter.tick(token);
            states.push((at, typewriter.rendered().to_string()));
            if let Step::Wait(delay) = step {
                timeline.schedule(delay, token);
            }
        }

        assert_eq!(
            states,
            vec![
                (0, String::new()),
                (100, "H".to_string()),
                (200, "Hi".to_string()),
            ]
        );
        assert!(timeline.is_idle());
        assert!(!typewriter.is_running());
    }

    #[test]
    fn eager_start_shows_first_char_when_start_delay_elapses() {
        let mut typewriter = Typewriter::new(Cadence::HERO);
        let mut timeline = Timeline::new();
        timeline.advance_to(1_000);

        let (token, step) = typewriter.start_eager("Hi");
        let mut states = vec![(timeline.now(), typewriter.rendered().to_string())];
        if let Step::Wait(delay) = step {
            timeline.schedule(delay, token);
        }
        while let Some((at, token)) = timeline.next() {
            let step = typewriter.tick(token);
            states.push((at, typewriter.rendered().to_string()));
            if let Step::Wait(delay) = step {
                timeline.schedule(delay, token);
            }
        }

        assert_eq!(
            states,
            vec![(1_000, "H".to_string()), (1_100, "Hi".to_string())]
        );
        assert!(!typewriter.is_running());
    }

    #[test]
    fn eager_start_of_empty_text_is_done() {
        let mut typewriter = Typewriter::new(Cadence::HERO);

        let (_, step) = typewriter.start_eager("");

        assert_eq!(step, Step::Done);
        assert_eq!(typewriter.rendered(), "");
    }

    #[test]
    fn empty_hero_text_finishes_immediately() {
        let mut typewriter = Typewriter::new(Cadence::HERO);

        let (token, step) = typewriter.start("");

        assert_eq!(step, Step::Done);
        assert_eq!(typewriter.tick(token), Step::Stale);
    }

    #[test]
    fn restarting_invalidates_the_previous_run() {
        let mut typewriter = Typewriter::new(Cadence::HERO);
        let (first, _) = typewriter.start("first");
        let (second, _) = typewriter.start("second");

        assert_eq!(typewriter.tick(first), Step::Stale);
        assert_eq!(typewriter.rendered(), "");
        assert_eq!(typewriter.tick(second), Step::Wait(100));
        assert_eq!(typewriter.rendered(), "s");
    }

    #[test]
    fn cancelled_run_stops_typing() {
        let mut typewriter = Typewriter::new(Cadence::HERO);
        let (token, _) = typewriter.start("abc");
        typewriter.tick(token);

        typewriter.cancel();

        assert_eq!(typewriter.tick(token), Step::Stale);
        assert_eq!(typewriter.rendered(), "a");
    }

    #[test]
    fn newline_gets_the_longer_pause() {
        assert_eq!(Cadence::CODE_WINDOW.delay_before('\n'), 150);
        assert_eq!(Cadence::CODE_WINDOW.delay_before('x'), 30);
        assert_eq!(Cadence::LEGACY_CODE_WINDOW.delay_before('\n'), 200);
        assert_eq!(Cadence::LEGACY_CODE_WINDOW.delay_before('x'), 50);
    }

    #[test]
    fn second_title_shows_after_hold_and_index_wraps() {
        let mut player = SnippetPlayer::new(TWO, CodeWindowProfile::Cycling.settings(3_000));
        assert_eq!(player.title(), "first.rs");

        let log = drive(&mut player, 6);

        assert_eq!(
            log,
            vec![
                (30, 0, "a".to_string()),
                (60, 0, "ab".to_string()),
                (3_060, 1, String::new()),
                (3_090, 1, "c".to_string()),
                (3_240, 1, "c\n".to_string()),
                (6_240, 0, String::new()),
            ]
        );
        assert_eq!(player.title(), "first.rs");
        assert_eq!(player.phase(), PlayerPhase::Typing);
    }

    #[test]
    fn title_switches_exactly_when_hold_elapses() {
        let mut player = SnippetPlayer::new(TWO, CodeWindowProfile::Cycling.settings(3_000));

        drive(&mut player, 2);
        assert_eq!(player.phase(), PlayerPhase::Holding);
        assert_eq!(player.title(), "first.rs");

        let mut player = SnippetPlayer::new(TWO, CodeWindowProfile::Cycling.settings(3_000));
        drive(&mut player, 3);
        assert_eq!(player.title(), "second.py");
    }

    #[test]
    fn legacy_profile_types_one_snippet_and_stops() {
        let profile = CodeWindowProfile::Legacy;
        let mut player = SnippetPlayer::new(profile.playlist(TWO), profile.settings(3_000));

        let log = drive(&mut player, 10);

        assert_eq!(
            log,
            vec![(50, 0, "a".to_string()), (100, 0, "ab".to_string())]
        );
        assert_eq!(player.phase(), PlayerPhase::Done);
    }

    #[test]
    fn restarting_player_drops_old_continuations() {
        let mut player = SnippetPlayer::new(TWO, CodeWindowProfile::Cycling.settings(3_000));
        let (old, _) = player.start();
        player.tick(old);

        let (fresh, step) = player.start();

        assert_eq!(player.tick(old), Step::Stale);
        assert_eq!(visible_text(&player), "");
        assert_eq!(step, Step::Wait(30));
        assert_eq!(player.tick(fresh), Step::Wait(30));
    }

    #[test]
    fn empty_playlist_is_done_at_start() {
        let mut player = SnippetPlayer::new(&[], CodeWindowProfile::Cycling.settings(3_000));

        let (_, step) = player.start();

        assert_eq!(step, Step::Done);
        assert_eq!(player.title(), "");
        assert!(player.visible().is_empty());
    }
}
