pub mod buzzer;
