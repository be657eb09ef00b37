use embassy_executor::Spawner;
use embassy_stm32::{gpio::OutputType, time::hz, timer::{simple_pwm::{PwmPin, SimplePwm}, Channel}};
use embassy_time::Delay;
use songbox::audio::tone_player::{Playback, TonePlayer};

use crate::{drivers::buzzer::Buzzer, pins::{BuzzerPin, BuzzerTimer, SharedAudioControl}};

#[macro_export]
macro_rules! create_audio_task {
    ($main_spawner:ident, $audio_control:ident, $p:ident) => {
        songbox_board::tasks::audio_task::start_audio_task(
            &$main_spawner, $audio_control, $p.TIM15, $p.PE6
        );
    };
}

#[embassy_executor::task]
async fn audio_task_entry(
    audio_control: &'static SharedAudioControl,
    mut tone_player: TonePlayer<'static, Buzzer<'static, BuzzerTimer>, Delay>,
) {
    defmt::info!("audio task ready, {} songs loaded", tone_player.catalog().len());

    loop {
        match tone_player.serve(audio_control).await {
            Ok(Playback::Completed) => {}
            Ok(Playback::Stopped { notes_played }) => {
                defmt::info!("song stopped after {} notes", notes_played);
            }
            Err(err) => {
                defmt::warn!("{}", defmt::Display2Format(&err));
            }
        }
    }
}

pub fn start_audio_task(
    task_spawner: &Spawner,
    audio_control: &'static SharedAudioControl,
    buzzer_timer: BuzzerTimer,
    buzzer_pin: BuzzerPin,
) {
    let ch2 = PwmPin::new_ch2(buzzer_pin, OutputType::PushPull);
    let pwm = SimplePwm::new(buzzer_timer, None, Some(ch2), None, None, hz(1), Default::default());

    let audio_driver = Buzzer::new(pwm, Channel::Ch2);
    let tone_player = TonePlayer::new(audio_driver, Delay);

    task_spawner.spawn(audio_task_entry(audio_control, tone_player)).unwrap();
}
