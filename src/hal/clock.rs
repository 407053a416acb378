//! Clock-tree configuration contract

/// Raw run-mode clock configuration, as a pair of register words. The
/// meaning of the bits is the implementation's business; the core only
/// carries them through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockConfig {
    pub rcc: u32,
    pub rcc2: u32,
}

/// System clock tree: apply a configuration, report the resulting
/// frequency. The frequency feeds the tick timer's millisecond-to-reload
/// conversion.
pub trait ClockControl {
    fn set_config(&mut self, cfg: ClockConfig);
    fn clock_hz(&self) -> u32;
}
