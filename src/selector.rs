//! Generator registry and selection policy
//!
//! All known generators are registered here as stateless descriptors, in a
//! fixed order. Selection filters the registry to the generators that report
//! platform support, then picks the highest-priority candidate. When two
//! supported candidates share a priority, the one registered earlier wins,
//! so selection is deterministic on any fixed platform.
//!
//! The facade [`random_bytes`] applies the crate-wide degrade policy at the
//! top level as well: if no generator at all is supported, it returns the
//! requested number of zero bytes instead of failing.

use crate::generator::{Descriptor, Generator, SecureGenerator, UrandomGenerator};

/// Every generator known to the crate, in registration order.
///
/// Order matters: it is the tie-break for equal priorities.
pub static REGISTRY: &[Descriptor] = &[
    Descriptor {
        name: "secure",
        supported: SecureGenerator::is_supported,
        priority: SecureGenerator::priority,
        instantiate: || Box::new(SecureGenerator::new()),
    },
    Descriptor {
        name: "urandom",
        supported: UrandomGenerator::is_supported,
        priority: UrandomGenerator::priority,
        instantiate: || Box::new(UrandomGenerator::new()),
    },
];

/// Picks the best generator among `candidates`.
///
/// Unsupported candidates are skipped. Among the supported ones the highest
/// priority wins; ties go to the earliest candidate in the slice. Returns
/// `None` when nothing is supported.
pub fn best_of(candidates: &[Descriptor]) -> Option<&Descriptor> {
    let mut winner: Option<&Descriptor> = None;

    for candidate in candidates {
        if !(candidate.supported)() {
            continue;
        }

        match winner {
            Some(current) if (candidate.priority)() <= (current.priority)() => {}
            _ => winner = Some(candidate),
        }
    }

    winner
}

/// Picks the best generator from the crate registry.
pub fn best() -> Option<&'static Descriptor> {
    best_of(REGISTRY)
}

/// Generates `byte_count` secure random bytes using the best available
/// generator.
///
/// On a platform with no supported generator this degrades to `byte_count`
/// zero bytes, consistent with the per-generator degrade policy.
pub fn random_bytes(byte_count: usize) -> Vec<u8> {
    match best() {
        Some(descriptor) => (descriptor.instantiate)().generate(byte_count),
        None => vec![0u8; byte_count],
    }
}
