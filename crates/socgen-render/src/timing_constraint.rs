//! SDC timing constraint consumed by the place-and-route tooling.

use socgen_config::{DerivedValues, SocConfig};

use crate::format::ns4;
use crate::renderer::{ArtifactKind, Renderer, GENERATED_MARKER};

/// Renders `hdl/clocks.sdc`.
///
/// A single `create_clock` line describes the board oscillator. The
/// waveform edges sit at zero and at half the period, so the derived
/// duty cycle is always 50%.
pub struct TimingConstraint;

impl Renderer for TimingConstraint {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::TimingConstraint
    }

    fn render(&self, _config: &SocConfig, derived: &DerivedValues) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {GENERATED_MARKER}\n"));
        out.push_str(&format!(
            "create_clock -name clk -period {} -waveform {{{} {}}} [get_ports clk]\n",
            ns4(derived.clock_period_ns),
            ns4(0.0),
            ns4(derived.clock_waveform_mid_ns)
        ));
        out
    }
}
