use defmt::info;
use embassy_executor::SpawnToken;
use game_engine::{GameConfig, GameEngine, MAX_SEQUENCE_LENGTH};
use static_cell::StaticCell;

use crate::{
    buzzer::PinBuzzer,
    clock::EmbassyClock,
    hardware::Hardware,
    input::{BoardPanel, Button, Polarity},
    random::PrngSource,
};

type BoardGameEngine<'a> =
    GameEngine<BoardPanel<'a>, PinBuzzer<'a>, EmbassyClock, PrngSource, MAX_SEQUENCE_LENGTH>;

pub struct GameTaskState<'a> {
    engine: BoardGameEngine<'a>,
}

impl<'a> GameTaskState<'a> {
    pub fn new(engine: BoardGameEngine<'a>) -> GameTaskState<'a> {
        GameTaskState { engine }
    }
}

pub static GAME_TASK_STATE: StaticCell<GameTaskState> = StaticCell::new();

pub fn create_task(hardware: Hardware<'static>) -> SpawnToken<impl Sized> {
    let buttons = hardware
        .buttons
        .map(|input| Button::new(input, Polarity::ActiveLow));

    let engine = GameEngine::new(
        BoardPanel::new(hardware.leds, buttons),
        PinBuzzer::new(hardware.buzzer),
        EmbassyClock,
        PrngSource::new(),
        GameConfig::default(),
    );

    game_task(GAME_TASK_STATE.init(GameTaskState::new(engine)))
}

#[embassy_executor::task]
pub async fn game_task(state: &'static mut GameTaskState<'static>) {
    info!("Game task started");

    state.engine.power_on().await;

    loop {
        state.engine.tick().await;
    }
}
