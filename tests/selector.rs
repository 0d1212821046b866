use randsource::generator::{Descriptor, Generator, Priority, SecureGenerator};
use randsource::selector::{REGISTRY, best, best_of, random_bytes};

/// Synthetic generator with a fixed support flag and priority, so the
/// selection policy can be tested independently of the platform.
macro_rules! fixed_generator {
    ($name:ident, $supported:expr, $priority:expr) => {
        #[derive(Default)]
        struct $name;

        impl Generator for $name {
            fn generate(&self, byte_count: usize) -> Vec<u8> {
                vec![0u8; byte_count]
            }

            fn is_supported() -> bool {
                $supported
            }

            fn priority() -> Priority {
                $priority
            }
        }
    };
}

fixed_generator!(LowGenerator, true, Priority::Low);
fixed_generator!(MediumGenerator, true, Priority::Medium);
fixed_generator!(HighGenerator, true, Priority::High);
fixed_generator!(UnsupportedHighGenerator, false, Priority::High);

#[test]
fn test_best_of_picks_highest_priority() {
    let candidates = [
        Descriptor::of::<LowGenerator>("low"),
        Descriptor::of::<HighGenerator>("high"),
        Descriptor::of::<MediumGenerator>("medium"),
    ];

    let winner = best_of(&candidates).unwrap();
    assert_eq!(winner.name, "high");
}

#[test]
fn test_best_of_skips_unsupported_candidates() {
    let candidates = [
        Descriptor::of::<UnsupportedHighGenerator>("unsupported"),
        Descriptor::of::<LowGenerator>("low"),
    ];

    let winner = best_of(&candidates).unwrap();
    assert_eq!(winner.name, "low");
}

#[test]
fn test_best_of_none_when_nothing_supported() {
    let candidates = [Descriptor::of::<UnsupportedHighGenerator>("unsupported")];
    assert!(best_of(&candidates).is_none());

    assert!(best_of(&[]).is_none());
}

#[test]
fn test_best_of_tie_breaks_to_registration_order() {
    let candidates = [
        Descriptor::of::<MediumGenerator>("first"),
        Descriptor::of::<MediumGenerator>("second"),
    ];

    let winner = best_of(&candidates).unwrap();
    assert_eq!(winner.name, "first");
}

#[test]
fn test_registry_ranks_secure_first() {
    assert_eq!(REGISTRY[0].name, "secure");
    assert!(REGISTRY.iter().all(|d| {
        (d.priority)() <= (REGISTRY[0].priority)()
    }));
}

#[test]
fn test_best_prefers_secure_when_supported() {
    if !SecureGenerator::is_supported() {
        return;
    }

    let winner = best().unwrap();
    assert_eq!(winner.name, "secure");
}

#[test]
fn test_random_bytes_returns_exact_length() {
    for byte_count in [0, 1, 32, 100] {
        assert_eq!(random_bytes(byte_count).len(), byte_count);
    }
}

#[test]
fn test_random_bytes_varies_between_calls() {
    if best().is_none() {
        return;
    }

    assert_ne!(random_bytes(16), random_bytes(16));
}

#[test]
fn test_descriptor_instantiates_working_generator() {
    let candidates = [Descriptor::of::<HighGenerator>("high")];
    let generator = (best_of(&candidates).unwrap().instantiate)();

    assert_eq!(generator.generate(4), vec![0u8; 4]);
}
