use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::effect::{EffectId, EffectSlot};
use crate::filter::{BrightnessFilter, BrightnessFilterConfig, Filter};

/// Configuration for the renderer
#[derive(Clone)]
pub struct RendererConfig {
    /// Effect shown after start
    pub effect: EffectId,
    /// Number of LEDs actually driven, at most `MAX_LEDS`
    pub led_count: usize,
    /// Color handed to color-based effects
    pub color: Rgb,
    /// Initial brightness
    pub brightness: u8,
    pub filters: BrightnessFilterConfig,
    /// Duration of color and brightness fades
    pub transition: Duration,
}

/// Renders effects into a fixed-size frame buffer
pub struct Renderer<const MAX_LEDS: usize> {
    led_count: usize,
    color: Rgb,
    transition: Duration,
    effect: EffectSlot,
    brightness: BrightnessFilter,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    pub fn new(config: &RendererConfig) -> Self {
        let mut brightness = BrightnessFilter::new(0, &config.filters);
        brightness.set(config.brightness, Duration::from_millis(0), Instant::from_millis(0));

        Self {
            led_count: config.led_count.min(MAX_LEDS),
            color: config.color,
            transition: config.transition,
            effect: config.effect.to_slot(config.color),
            brightness,
            frame_buffer: [Rgb::default(); MAX_LEDS],
        }
    }

    /// Process one frame
    ///
    /// Call this once per frame with a monotonically increasing `now`.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.brightness.tick(now);

        let frame = &mut self.frame_buffer[..self.led_count];
        self.effect.render(now, frame);
        self.brightness.apply(frame);

        frame
    }

    /// Render a frame and write it to `output`
    pub fn render_to<O: OutputDriver>(&mut self, now: Instant, output: &mut O) {
        let frame = self.render(now);
        output.write(frame);
    }

    /// Switch to the effect with its default settings
    pub fn set_effect(&mut self, effect: EffectId) {
        self.set_effect_slot(effect.to_slot(self.color));
    }

    /// Switch to a preconfigured effect
    pub fn set_effect_slot(&mut self, effect: EffectSlot) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Renderer.set_effect_slot] {} -> {}",
            self.effect.id().as_str(),
            effect.id().as_str()
        );
        self.effect = effect;
        self.effect.reset();
    }

    pub fn set_color(&mut self, color: Rgb, now: Instant) {
        self.color = color;
        self.effect.set_color(color, self.transition, now);
    }

    pub fn set_brightness(&mut self, brightness: u8, now: Instant) {
        self.brightness.set(brightness, self.transition, now);
    }

    /// Output brightness, after range correction and before the curve
    pub fn brightness(&self) -> u8 {
        self.brightness.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.brightness.is_transitioning() || self.effect.is_transitioning()
    }

    pub fn effect_id(&self) -> EffectId {
        self.effect.id()
    }

    pub fn led_count(&self) -> usize {
        self.led_count
    }
}
