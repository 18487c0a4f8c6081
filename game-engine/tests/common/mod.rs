#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use game_engine::{
    Buzzer, Clock, Color, Duration, GameConfig, GameEngine, GameState, Instant, Panel,
    RandomSource,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Led(Color, bool),
    Tone(f32, f32),
    Sleep(Duration),
}

/// Board shared by the mock collaborators. Time only moves on `sleep`.
pub struct Rig {
    pub now: Instant,
    pub held: [bool; Color::COUNT],
    pub leds: [bool; Color::COUNT],
    pub events: Vec<Event>,
    pub draws: VecDeque<u8>,
    pub reseeds: Vec<u64>,
}

pub type SharedRig = Rc<RefCell<Rig>>;

pub struct MockPanel(SharedRig);
pub struct MockBuzzer(SharedRig);
pub struct MockClock(SharedRig);
pub struct MockRandom(SharedRig);

impl Panel for MockPanel {
    fn set_led(&mut self, color: Color, lit: bool) {
        let mut rig = self.0.borrow_mut();
        rig.leds[color.index()] = lit;
        rig.events.push(Event::Led(color, lit));
    }

    fn is_pressed(&mut self, color: Color) -> bool {
        self.0.borrow().held[color.index()]
    }
}

impl Buzzer for MockBuzzer {
    async fn play_tone(&mut self, frequency_hz: f32, duration_fraction: f32) {
        self.0
            .borrow_mut()
            .events
            .push(Event::Tone(frequency_hz, duration_fraction));
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.0.borrow().now
    }

    async fn sleep(&mut self, duration: Duration) {
        let mut rig = self.0.borrow_mut();
        rig.now += duration;
        rig.events.push(Event::Sleep(duration));
    }
}

impl RandomSource for MockRandom {
    fn next_in_range(&mut self, _upper: u8) -> u8 {
        self.0
            .borrow_mut()
            .draws
            .pop_front()
            .expect("no scripted draw left")
    }

    fn reseed(&mut self, entropy: u64) {
        self.0.borrow_mut().reseeds.push(entropy);
    }
}

pub type TestEngine<const N: usize> = GameEngine<MockPanel, MockBuzzer, MockClock, MockRandom, N>;

pub fn setup<const N: usize>(draws: &[Color]) -> (TestEngine<N>, SharedRig) {
    let rig = Rc::new(RefCell::new(Rig {
        now: Instant::from_millis(1_000),
        held: [false; Color::COUNT],
        leds: [false; Color::COUNT],
        events: Vec::new(),
        draws: draws.iter().map(|c| c.index() as u8).collect(),
        reseeds: Vec::new(),
    }));

    let engine = GameEngine::new(
        MockPanel(rig.clone()),
        MockBuzzer(rig.clone()),
        MockClock(rig.clone()),
        MockRandom(rig.clone()),
        GameConfig::default(),
    );

    (engine, rig)
}

pub fn tick<const N: usize>(engine: &mut TestEngine<N>) -> GameState {
    let state = pollster::block_on(engine.tick());
    assert_invariants(engine);
    state
}

pub fn assert_invariants<const N: usize>(engine: &TestEngine<N>) {
    assert!(engine.round() <= engine.sequence().len());
    assert!(engine.sequence().len() <= N);
    assert!(engine.cursor() <= engine.round());
}

pub fn hold(rig: &SharedRig, colors: &[Color]) {
    let mut rig = rig.borrow_mut();
    rig.held = [false; Color::COUNT];
    for color in colors {
        rig.held[color.index()] = true;
    }
}

pub fn release_all(rig: &SharedRig) {
    hold(rig, &[]);
}

pub fn take_events(rig: &SharedRig) -> Vec<Event> {
    std::mem::take(&mut rig.borrow_mut().events)
}

pub fn tones(events: &[Event]) -> Vec<(f32, f32)> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Tone(freq, fraction) => Some((*freq, *fraction)),
            _ => None,
        })
        .collect()
}

/// Presses Red in idle and runs until the first player input poll is due.
pub fn start_game<const N: usize>(engine: &mut TestEngine<N>, rig: &SharedRig) {
    assert_eq!(engine.state(), GameState::Idle);
    hold(rig, &[Color::Red]);
    assert_eq!(tick(engine), GameState::StartGame);
    release_all(rig);
    assert_eq!(tick(engine), GameState::GenerateSequence);
    assert_eq!(tick(engine), GameState::PlayerInput);
}

/// Presses and releases one button. Returns the state right after the press.
pub fn tap<const N: usize>(engine: &mut TestEngine<N>, rig: &SharedRig, color: Color) -> GameState {
    hold(rig, &[color]);
    let state = tick(engine);
    release_all(rig);
    if state == GameState::PlayerInput {
        assert_eq!(tick(engine), GameState::PlayerInput);
    }
    state
}

/// Repeats the current sequence and reveals the next round.
pub fn complete_round<const N: usize>(engine: &mut TestEngine<N>, rig: &SharedRig) {
    let expected: Vec<Color> = engine.sequence().to_vec();
    let (last, head) = expected.split_last().expect("empty sequence");
    for &color in head {
        assert_eq!(tap(engine, rig, color), GameState::PlayerInput);
    }
    assert_eq!(tap(engine, rig, *last), GameState::GenerateSequence);
    assert_eq!(tick(engine), GameState::PlayerInput);
}
