//! The capability set the pipeline requires.
//!
//! Capabilities are declared once, in a fixed order. Diagnostics always
//! report missing capabilities in this declaration order, independent of
//! how the evaluation happened to visit them.

use crate::host::Facilities;

use super::verdict::Verdict;

/// A named capability: one host facility the pipeline cannot run without.
pub struct Capability {
    /// Stable diagnostic name.
    pub name: &'static str,
    /// Probe deciding whether the host provides this capability.
    probe: fn(&dyn Facilities) -> bool,
}

fn probe_canvas(f: &dyn Facilities) -> bool {
    f.can_create_surface()
}

fn probe_blob(f: &dyn Facilities) -> bool {
    f.can_spool_blob()
}

fn probe_url(f: &dyn Facilities) -> bool {
    f.can_mint_object_url()
}

fn probe_array_buffer(f: &dyn Facilities) -> bool {
    f.can_alloc_fixed_buffer()
}

fn probe_image_data(f: &dyn Facilities) -> bool {
    f.can_wrap_pixel_buffer()
}

/// All required capabilities, in declaration order.
pub const CAPABILITIES: &[Capability] = &[
    Capability {
        name: "canvas",
        probe: probe_canvas,
    },
    Capability {
        name: "blob",
        probe: probe_blob,
    },
    Capability {
        name: "url",
        probe: probe_url,
    },
    Capability {
        name: "arrayBuffer",
        probe: probe_array_buffer,
    },
    Capability {
        name: "imageData",
        probe: probe_image_data,
    },
];

/// Evaluate every capability against the given facilities.
///
/// Every probe runs even after a failure, so the verdict carries the full
/// list of missing capabilities. Pure with respect to gate state: callers
/// decide what to do with the verdict.
pub fn evaluate(facilities: &dyn Facilities) -> Verdict {
    let missing: Vec<&'static str> = CAPABILITIES
        .iter()
        .filter(|capability| !(capability.probe)(facilities))
        .map(|capability| capability.name)
        .collect();

    Verdict::new(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FixedHost;

    #[test]
    fn declaration_order_is_stable() {
        let names: Vec<_> = CAPABILITIES.iter().map(|c| c.name).collect();
        assert_eq!(names, ["canvas", "blob", "url", "arrayBuffer", "imageData"]);
    }

    #[test]
    fn full_support_yields_supported_verdict() {
        let verdict = evaluate(&FixedHost::default());
        assert!(verdict.is_supported());
        assert!(verdict.missing().is_empty());
    }

    #[test]
    fn single_missing_capability_is_reported_alone() {
        let host = FixedHost {
            surface: false,
            ..FixedHost::default()
        };
        let verdict = evaluate(&host);
        assert!(!verdict.is_supported());
        assert_eq!(verdict.missing(), ["canvas"]);
    }

    #[test]
    fn multiple_missing_capabilities_keep_declaration_order() {
        let host = FixedHost {
            blob: false,
            fixed_buffer: false,
            ..FixedHost::default()
        };
        let verdict = evaluate(&host);
        assert_eq!(verdict.missing(), ["blob", "arrayBuffer"]);
    }

    #[test]
    fn nothing_supported_reports_every_capability() {
        let verdict = evaluate(&FixedHost::supporting_nothing());
        assert_eq!(
            verdict.missing(),
            ["canvas", "blob", "url", "arrayBuffer", "imageData"]
        );
    }
}
