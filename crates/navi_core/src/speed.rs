//! Simulação da velocidade exibida.
//!
//! A cada `update_interval` a velocidade é `base + jitter`, com jitter
//! uniforme em `[-jitter_range/2, +jitter_range/2)`, limitada a
//! `[min_speed, max_speed]` e arredondada. Ao trocar de destino o valor
//! volta exatamente para a nova base e o intervalo é re-armado.

use crate::timer::IntervalTimer;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;

pub const MIN_SPEED: f32 = 20.0;
pub const MAX_SPEED: f32 = 90.0;
pub const SPEED_UPDATE_INTERVAL: Duration = Duration::from_millis(4000);
pub const SPEED_JITTER_RANGE: f32 = 10.0;

/// Parâmetros da simulação.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedParams {
    pub min_speed: f32,
    pub max_speed: f32,
    pub update_interval: Duration,
    pub jitter_range: f32,
}

impl Default for SpeedParams {
    fn default() -> Self {
        Self {
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            update_interval: SPEED_UPDATE_INTERVAL,
            jitter_range: SPEED_JITTER_RANGE,
        }
    }
}

impl SpeedParams {
    fn clamp_round(&self, speed: f32) -> u32 {
        // NaN passaria pelo `clamp`
        let speed = if speed.is_finite() { speed } else { self.min_speed };
        speed.clamp(self.min_speed, self.max_speed).round() as u32
    }
}

/// Próxima velocidade para um sorteio `draw` em `[0, 1)`.
pub fn jittered_speed(base: f32, draw: f64, params: &SpeedParams) -> u32 {
    let jitter = (draw as f32 - 0.5) * params.jitter_range;
    params.clamp_round(base + jitter)
}

/// Velocidade simulada atual e o intervalo que a atualiza.
#[derive(Debug, Clone)]
pub struct SpeedSimulator {
    params: SpeedParams,
    base_speed: f32,
    current: u32,
    timer: IntervalTimer,
}

impl SpeedSimulator {
    /// Começa exibindo a base, sem jitter, com o intervalo já armado.
    pub fn new(base_speed: f32, params: SpeedParams, now: Instant) -> Self {
        let mut sim = Self {
            params,
            base_speed,
            current: params.clamp_round(base_speed),
            timer: IntervalTimer::new(params.update_interval),
        };
        sim.timer.start(now);
        sim
    }

    /// Troca a base: o valor exibido passa a ser a base exata e o
    /// intervalo antigo é cancelado e re-armado a partir de `now`.
    pub fn rebase(&mut self, base_speed: f32, now: Instant) {
        self.timer.stop();
        self.base_speed = base_speed;
        self.current = self.params.clamp_round(base_speed);
        self.timer.start(now);
        debug!("Velocidade rebase para {} km/h", self.current);
    }

    /// Avança a simulação. Retorna o novo valor quando o intervalo vence.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<u32> {
        if !self.timer.poll(now) {
            return None;
        }
        let draw: f64 = rng.random();
        self.current = jittered_speed(self.base_speed, draw, &self.params);
        Some(self.current)
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// RNG que sempre devolve o mesmo `u64`.
    pub(crate) struct ConstRng(pub u64);

    impl rand::RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (i, b) in dst.iter_mut().enumerate() {
                *b = self.0.to_le_bytes()[i % 8];
            }
        }
    }

    /// Sorteio mais próximo possível de 1.0.
    pub(crate) fn max_draw() -> ConstRng {
        ConstRng(u64::MAX)
    }

    #[test]
    fn jitter_is_centered_on_base() {
        let p = SpeedParams::default();
        assert_eq!(jittered_speed(45.0, 0.5, &p), 45);
        assert_eq!(jittered_speed(45.0, 0.0, &p), 40);
        assert_eq!(jittered_speed(45.0, 1.0, &p), 50);
        assert_eq!(jittered_speed(45.0, 0.75, &p), 48);
    }

    #[test]
    fn result_is_clamped() {
        let p = SpeedParams::default();
        assert_eq!(jittered_speed(88.0, 0.99, &p), 90);
        assert_eq!(jittered_speed(21.0, 0.0, &p), 20);
        assert_eq!(jittered_speed(200.0, 0.5, &p), 90);
    }

    #[test]
    fn non_finite_jitter_falls_back_to_min_speed() {
        let p = SpeedParams {
            jitter_range: f32::INFINITY,
            ..SpeedParams::default()
        };
        assert_eq!(jittered_speed(45.0, 0.5, &p), 20);
        assert_eq!(jittered_speed(45.0, 1.0, &p), 20);
        assert_eq!(jittered_speed(f32::NAN, 0.5, &SpeedParams::default()), 20);
    }

    #[test]
    fn always_in_range_for_any_draw() {
        let p = SpeedParams::default();
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for base in [20.0, 23.5, 45.0, 55.0, 87.0, 90.0] {
            for _ in 0..2000 {
                let v = jittered_speed(base, rng.random::<f64>(), &p);
                assert!((20..=90).contains(&v), "base {base} -> {v}");
            }
        }
    }

    #[test]
    fn starts_at_base_without_jitter() {
        let t0 = Instant::now();
        let sim = SpeedSimulator::new(45.0, SpeedParams::default(), t0);
        assert_eq!(sim.current(), 45);
        assert!(sim.is_running());
        assert_eq!(sim.next_tick_in(t0), Some(SPEED_UPDATE_INTERVAL));
    }

    #[test]
    fn tick_applies_jitter_after_full_interval() {
        let t0 = Instant::now();
        let mut sim = SpeedSimulator::new(45.0, SpeedParams::default(), t0);
        let mut rng = max_draw();

        assert_eq!(sim.poll(t0 + Duration::from_millis(3999), &mut rng), None);
        assert_eq!(sim.current(), 45);
        assert_eq!(sim.poll(t0 + SPEED_UPDATE_INTERVAL, &mut rng), Some(50));
        assert_eq!(sim.current(), 50);
    }

    #[test]
    fn rebase_resets_value_and_rearms() {
        let t0 = Instant::now();
        let mut sim = SpeedSimulator::new(45.0, SpeedParams::default(), t0);
        let mut rng = max_draw();
        sim.poll(t0 + SPEED_UPDATE_INTERVAL, &mut rng);

        let switch = t0 + Duration::from_millis(6000);
        sim.rebase(55.0, switch);
        assert_eq!(sim.current(), 55);

        // O prazo antigo (t0 + 8000) não vale mais
        assert_eq!(sim.poll(t0 + SPEED_UPDATE_INTERVAL * 2, &mut rng), None);
        assert_eq!(sim.current(), 55);
        assert_eq!(sim.poll(switch + SPEED_UPDATE_INTERVAL, &mut rng), Some(60));
    }

    #[test]
    fn stopped_simulator_keeps_value() {
        let t0 = Instant::now();
        let mut sim = SpeedSimulator::new(45.0, SpeedParams::default(), t0);
        sim.stop();
        assert_eq!(sim.poll(t0 + SPEED_UPDATE_INTERVAL * 3, &mut max_draw()), None);
        assert_eq!(sim.current(), 45);
    }
}
