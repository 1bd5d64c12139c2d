use car_race::trip::{Consumption, Duration, compute_consumption, compute_duration};

#[test]
fn test_duration_splits_hours_and_minutes() {
    for (distance, speed) in [(120.0, 80.0), (10.0, 3.0), (500.0, 130.0), (1.0, 90.0)] {
        let duration = compute_duration(distance, speed);
        let total = distance / speed * 60.0;
        let hours = (total / 60.0).floor();
        let minutes = ((total / 60.0 - hours) * 60.0).round();

        if minutes == 60.0 {
            assert_eq!(duration.hours(), Some(hours as u64 + 1));
            assert_eq!(duration.minutes(), Some(0));
        } else {
            assert_eq!(duration.hours(), Some(hours as u64));
            assert_eq!(duration.minutes(), Some(minutes as u32));
        }
    }
}

#[test]
fn test_minutes_always_below_sixty() {
    let mut distance = 0.5;
    while distance < 400.0 {
        let minutes = compute_duration(distance, 77.0).minutes().unwrap();
        assert!(minutes < 60, "{} km gave {} minutes", distance, minutes);
        distance += 0.37;
    }
}

#[test]
fn test_format_is_idempotent() {
    let duration = compute_duration(333.0, 97.0);
    let consumption = compute_consumption(4.0, 97.0, 333.0);
    assert_eq!(duration.format(true), duration.format(true));
    assert_eq!(consumption.format(false), consumption.format(false));
}

#[test]
fn test_duration_delta_is_antisymmetric() {
    let pairs = [((120.0, 80.0), (120.0, 100.0)), ((50.0, 45.0), (50.0, 130.0))];
    for ((d1, s1), (d2, s2)) in pairs {
        let a = compute_duration(d1, s1);
        let b = compute_duration(d2, s2);
        let ab = a.delta(&b);
        let ba = b.delta(&a);

        assert_eq!(ab.hours(), ba.hours());
        assert_eq!(ab.minutes(), ba.minutes());
        assert_ne!(ab.is_negative(), ba.is_negative());
        assert_eq!(ab.total_minutes().unwrap(), -ba.total_minutes().unwrap());
    }
}

#[test]
fn test_consumption_delta_is_antisymmetric() {
    let a = compute_consumption(3.5, 80.0, 120.0);
    let b = compute_consumption(3.5, 100.0, 120.0);
    let ab = a.delta(&b);
    let ba = b.delta(&a);

    assert_eq!(ab.liters(), -ba.liters());
    assert!(ab.is_negative());
    assert!(!ba.is_negative());
    assert_eq!(ab.format(true).trim_start_matches('-'), ba.format(true).trim_start_matches('+'));
}

#[test]
fn test_consumption_strictly_increasing_in_speed() {
    let mut previous = compute_consumption(3.0, 1.0, 150.0).liters();
    for speed in 2..=250 {
        let current = compute_consumption(3.0, speed as f64, 150.0).liters();
        assert!(current > previous, "not increasing at {} km/h", speed);
        previous = current;
    }
}

#[test]
fn test_reference_speed_example() {
    assert_eq!(compute_consumption(3.0, 1.0, 100.0).format(false), "3.00 l");
}

#[test]
fn test_sentinel_has_no_sign_or_unit() {
    let huge = Consumption::new(f64::INFINITY);
    let negative_huge = Consumption::new(f64::NEG_INFINITY);
    for consumption in [huge, negative_huge] {
        assert_eq!(consumption.format(false), "TOO MUCH!");
        assert_eq!(consumption.format(true), "TOO MUCH!");
    }
}

#[test]
fn test_unbounded_duration_uses_sentinel() {
    let duration = Duration::from_minutes(f64::INFINITY);
    assert_eq!(duration.format(false), "TOO MUCH!");
    assert_eq!(Duration::from_minutes(f64::NAN).format(true), "TOO MUCH!");
}

#[test]
fn test_zero_hours_omitted() {
    assert_eq!(Duration::from_minutes(45.0).format(false), "45min");
    assert_eq!(Duration::from_minutes(0.0).format(false), "0min");
}

#[test]
fn test_negative_distance_passes_through() {
    // Inputs are trusted; nonsense in, nonsense out, but no panic
    let duration = compute_duration(-60.0, 60.0);
    assert!(duration.is_negative());
    assert_eq!(duration.format(false), "-1h, 0min");

    let consumption = compute_consumption(3.0, 1.0, -100.0);
    assert_eq!(consumption.format(true), "-3.00 l");
}

#[test]
fn test_extreme_inputs_never_panic() {
    let distances = [1e-300, 1e-9, 1.0, 1e6, 1e15, 1e20, 1e300, f64::MAX];
    let speeds = [f64::MIN_POSITIVE, 1e-300, 1e-9, 1.0, 300.0, 1e12, f64::MAX];

    let mut results = Vec::new();
    for distance in distances {
        for speed in speeds {
            let duration = compute_duration(distance, speed);
            let consumption = compute_consumption(4.0, speed, distance);
            if let Some(minutes) = duration.minutes() {
                assert!(minutes < 60);
            }
            assert!(!duration.format(true).is_empty());
            assert!(!consumption.format(true).is_empty());
            results.push((duration, consumption));
        }
    }

    for (a, ca) in &results {
        for (b, cb) in &results {
            let ab = a.delta(b);
            let ba = b.delta(a);
            assert_eq!(ab.is_finite(), ba.is_finite());
            if let (Some(x), Some(y)) = (ab.total_minutes(), ba.total_minutes()) {
                assert_eq!(x, -y);
            }
            assert!(!ca.delta(cb).format(true).is_empty());
        }
    }
}

#[test]
fn test_huge_distance_duration_is_sentinel() {
    for speed in [1.0, 2.0, 120.0] {
        let duration = compute_duration(1e20, speed);
        assert_eq!(duration.format(false), "TOO MUCH!");
    }

    let slow = compute_duration(1e20, 1.0);
    let fast = compute_duration(1e20, 2.0);
    assert_eq!(slow.delta(&fast).format(true), "TOO MUCH!");
    assert!(!slow.delta(&compute_duration(100.0, 50.0)).is_negative());
    assert!(compute_duration(100.0, 50.0).delta(&slow).is_negative());
}

#[test]
fn test_tiny_speed_duration_is_sentinel() {
    let duration = compute_duration(100.0, 1e-300);
    assert!(!duration.is_finite());
    assert_eq!(duration.format(true), "TOO MUCH!");
}

#[test]
fn test_large_but_representable_duration_stays_finite() {
    let slow = compute_duration(6e14, 10.0);
    let fast = compute_duration(6e14, 20.0);
    assert_eq!(slow.format(false), "60000000000000h, 0min");
    assert_eq!(slow.delta(&fast).format(true), "+30000000000000h, 0min");
}

#[test]
fn test_halfway_consumption_rounds_up() {
    // 0.375 * 3 = 1.125 and 0.03125 * 4 = 0.125, both exactly halfway
    assert_eq!(compute_consumption(3.0, 1.0, 37.5).format(false), "1.13 l");
    assert_eq!(compute_consumption(4.0, 1.0, 3.125).format(true), "+0.13 l");

    let a = compute_consumption(3.0, 1.0, 37.5);
    let b = compute_consumption(3.0, 1.0, 75.0);
    assert_eq!(a.delta(&b).format(true), "-1.13 l");
    assert_eq!(b.delta(&a).format(true), "+1.13 l");
}
