#![no_std]
#![no_main]

use defmt_rtt as _;
// provide embedded panic probe
use panic_probe as _;

use embassy_stm32::{
    gpio::OutputType,
    time::khz,
    timer::{
        simple_pwm::{PwmPin, SimplePwm},
        Channel,
    },
};
use embassy_time::{Delay, Timer};
use songbox::audio::{songs::SONG_CATALOG, tone_player::TonePlayer};
use songbox_board::{drivers::buzzer::Buzzer, get_system_config, SONG_PAUSE_MS};

#[embassy_executor::main]
async fn main(_main_spawner: embassy_executor::Spawner) {
    // init system
    let sys_config = get_system_config();
    let p = embassy_stm32::init(sys_config);

    defmt::info!("embassy HAL configured.");

    let ch2 = PwmPin::new_ch2(p.PE6, OutputType::PushPull);
    let pwm = SimplePwm::new(
        p.TIM15,
        None,
        Some(ch2),
        None,
        None,
        khz(2),
        Default::default(),
    );

    let audio_driver = Buzzer::new(pwm, Channel::Ch2);
    let mut tone_player = TonePlayer::new(audio_driver, Delay);

    for (selection, melody) in SONG_CATALOG.entries() {
        defmt::info!("song {}: {}", selection, melody.title());
        if let Err(err) = tone_player.play_song(selection).await {
            defmt::error!("{}", defmt::Display2Format(&err));
        }

        Timer::after_millis(SONG_PAUSE_MS).await;
    }

    // one past the end, should only print the selection diagnostic
    let invalid_selection = SONG_CATALOG.len() as u8 + 1;
    match tone_player.play_song(invalid_selection).await {
        Ok(()) => defmt::error!("selection {} played but is not in the catalog", invalid_selection),
        Err(err) => defmt::info!("{}", defmt::Display2Format(&err)),
    }

    defmt::info!("piezo test complete");

    loop {
        Timer::after_millis(10).await;
    }
}
