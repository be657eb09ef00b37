/// Tone output channel, e.g. a PWM pin driving a piezo buzzer.
pub trait PlayTone {
    /// Start a continuous tone. A tone of 0 silences the output.
    fn play_tone(&mut self, tone: u16);
    fn can_play_tone(&self, tone: u16) -> bool;

    fn stop_tone(&mut self) {
        self.play_tone(0);
    }
}
