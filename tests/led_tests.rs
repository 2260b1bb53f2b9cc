//! Integration tests for the embedded-hal LED adapters

mod common;
use common::*;

use rgb_indicator::{
    Channels, Color, DigitalRgbLed, OnLevel, PwmRgbLed, RgbIndicator, RgbLed, Srgb,
};

fn levels(led: DigitalRgbLed<MockPin, MockPin, MockPin>) -> (bool, bool, bool) {
    let (r, g, b) = led.release();
    (r.high.unwrap(), g.high.unwrap(), b.high.unwrap())
}

#[test]
fn digital_led_starts_off_for_both_polarities() {
    let anode = DigitalRgbLed::common_anode(MockPin::default(), MockPin::default(), MockPin::default());
    assert_eq!(anode.on_level(), OnLevel::Low);
    assert_eq!(levels(anode), (true, true, true));

    let cathode =
        DigitalRgbLed::common_cathode(MockPin::default(), MockPin::default(), MockPin::default());
    assert_eq!(cathode.on_level(), OnLevel::High);
    assert_eq!(levels(cathode), (false, false, false));
}

#[test]
fn common_cathode_drives_lit_channels_high() {
    let mut led =
        DigitalRgbLed::common_cathode(MockPin::default(), MockPin::default(), MockPin::default());

    led.set_channels(Color::Yellow.channels());

    assert_eq!(levels(led), (true, true, false));
}

#[test]
fn common_anode_drives_lit_channels_low() {
    let mut led = DigitalRgbLed::common_anode(MockPin::default(), MockPin::default(), MockPin::default());

    led.set_channels(Color::Yellow.channels());

    assert_eq!(levels(led), (false, false, true));
}

#[test]
fn digital_led_writes_every_channel_on_each_update() {
    let mut led = DigitalRgbLed::new(
        MockPin::default(),
        MockPin::default(),
        MockPin::default(),
        OnLevel::High,
    );
    led.set_channels(Channels::new(true, false, false));
    led.set_channels(Channels::new(true, false, false));

    assert!(!led.pwm_capable());
    let (r, g, b) = led.release();
    assert_eq!((r.writes, g.writes, b.writes), (3, 3, 3));
}

#[test]
fn indicator_drives_digital_pins() {
    let led = DigitalRgbLed::common_anode(MockPin::default(), MockPin::default(), MockPin::default());
    let mut indicator = RgbIndicator::new(led, MockDelay::new());

    indicator.traverse(Color::Red, Color::White);

    let (led, delay) = indicator.release();
    assert_eq!(levels(led), (false, false, false));
    assert_eq!(delay.pauses().len(), 5);
}

#[test]
fn pwm_led_starts_off() {
    let cathode = PwmRgbLed::new(MockPwm::default(), MockPwm::default(), MockPwm::default(), OnLevel::High);
    let (r, g, b) = cathode.release();
    assert_eq!((r.duty, g.duty, b.duty), (0, 0, 0));

    let anode = PwmRgbLed::new(MockPwm::default(), MockPwm::default(), MockPwm::default(), OnLevel::Low);
    let (r, g, b) = anode.release();
    let max = MockPwm::MAX_DUTY;
    assert_eq!((r.duty, g.duty, b.duty), (max, max, max));
}

#[test]
fn pwm_led_shows_discrete_colors_at_full_scale() {
    let mut led = PwmRgbLed::new(MockPwm::default(), MockPwm::default(), MockPwm::default(), OnLevel::High);

    led.set_channels(Color::Magenta.channels());

    assert!(led.pwm_capable());
    let (r, g, b) = led.release();
    assert_eq!((r.duty, g.duty, b.duty), (MockPwm::MAX_DUTY, 0, MockPwm::MAX_DUTY));
}

#[test]
fn indicator_sets_analog_levels_on_pwm_led() {
    let led = PwmRgbLed::new(MockPwm::default(), MockPwm::default(), MockPwm::default(), OnLevel::High);
    let mut indicator = RgbIndicator::new(led, MockDelay::new());
    assert!(indicator.is_pwm_capable());

    indicator.set_rgb(Srgb::new(255, 0, 51));

    assert_eq!(indicator.current_color(), Color::Magenta);
    let (led, _) = indicator.release();
    let (r, g, b) = led.release();
    // 51 / 255 of 1000
    assert_eq!((r.duty, g.duty, b.duty), (1000, 0, 200));
}

#[test]
fn common_anode_pwm_inverts_levels() {
    let led = PwmRgbLed::new(MockPwm::default(), MockPwm::default(), MockPwm::default(), OnLevel::Low);
    let mut indicator = RgbIndicator::new(led, MockDelay::new());

    indicator.set_rgb(Srgb::new(0, 255, 204));

    assert_eq!(indicator.current_color(), Color::Cyan);
    let (led, _) = indicator.release();
    let (r, g, b) = led.release();
    assert_eq!((r.duty, g.duty, b.duty), (1000, 0, 200));
}

#[test]
fn wheel_animation_continues_from_analog_color() {
    let led = PwmRgbLed::new(MockPwm::default(), MockPwm::default(), MockPwm::default(), OnLevel::High);
    let mut indicator = RgbIndicator::new(led, MockDelay::new());
    indicator.set_rgb(Srgb::new(0, 0, 90));

    indicator.traverse_to(Color::Green);

    assert_eq!(indicator.current_color(), Color::Green);
    assert_eq!(indicator.delay().pauses().len(), 2);
}
