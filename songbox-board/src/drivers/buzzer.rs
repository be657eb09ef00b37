use embassy_stm32::{
    time::hz,
    timer::{simple_pwm::SimplePwm, CaptureCompare16bitInstance, Channel},
};
use num_traits::clamp;
use songbox::drivers::audio::PlayTone;

pub const BUZZER_MIN_FREQ: u16 = 35;
pub const BUZZER_MAX_FREQ: u16 = 7000;

/// Piezo buzzer on one channel of a PWM timer, driven at 50% duty.
pub struct Buzzer<'d, T: CaptureCompare16bitInstance> {
    pwm: SimplePwm<'d, T>,
    channel: Channel,

    min_freq: u16,
    max_freq: u16,
}

impl<'d, T: CaptureCompare16bitInstance> Buzzer<'d, T> {
    pub fn new(pwm: SimplePwm<'d, T>, channel: Channel) -> Self {
        Self::new_with_freq_range(pwm, channel, BUZZER_MIN_FREQ, BUZZER_MAX_FREQ)
    }

    pub fn new_with_freq_range(pwm: SimplePwm<'d, T>, channel: Channel, min_freq: u16, max_freq: u16) -> Self {
        let mut buzzer = Buzzer {
            pwm,
            channel,
            min_freq,
            max_freq,
        };

        // stay quiet until the first note
        buzzer.pwm.disable(buzzer.channel);
        buzzer
    }
}

impl<'d, T: CaptureCompare16bitInstance> PlayTone for Buzzer<'d, T> {
    fn play_tone(&mut self, freq: u16) {
        if freq == 0 {
            self.pwm.disable(self.channel);
        } else {
            let freq = clamp(freq, self.min_freq, self.max_freq);
            self.pwm.set_frequency(hz(freq.into()));
            let max_duty = self.pwm.get_max_duty();
            self.pwm.set_duty(self.channel, max_duty / 2);
            self.pwm.enable(self.channel);
        }
    }

    fn can_play_tone(&self, freq: u16) -> bool {
        self.min_freq < freq && freq < self.max_freq
    }
}
