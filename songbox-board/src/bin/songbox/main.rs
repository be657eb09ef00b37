#![no_std]
#![no_main]

use defmt_rtt as _;
// provide embedded panic probe
use panic_probe as _;

use embassy_time::Timer;
use songbox::audio::{songs::SONG_CATALOG, AudioCommand};
use songbox_board::{create_audio_task, get_system_config, pins::SharedAudioControl, SONG_PAUSE_MS};

static AUDIO_CONTROL: SharedAudioControl = SharedAudioControl::new();

#[embassy_executor::main]
async fn main(main_spawner: embassy_executor::Spawner) {
    // init system
    let sys_config = get_system_config();
    let p = embassy_stm32::init(sys_config);

    defmt::info!("embassy HAL configured.");

    let audio_control = &AUDIO_CONTROL;

    ///////////////////
    //  start tasks  //
    ///////////////////

    create_audio_task!(main_spawner, audio_control, p);

    // no selection input on this board, walk the catalog instead
    loop {
        for (selection, melody) in SONG_CATALOG.entries() {
            defmt::info!("requesting song {}: {}", selection, melody.title());
            if let Err(err) = audio_control.request(AudioCommand::PlaySong(selection)) {
                defmt::warn!("{}", defmt::Display2Format(&err));
            }

            Timer::after(melody.total_duration()).await;
            Timer::after_millis(SONG_PAUSE_MS).await;
        }
    }
}
