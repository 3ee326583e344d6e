//! Integration tests for the simulated room scanner.
//!
//! Tests cover:
//! - The fixed result arriving after the simulated delay
//! - Cancellation by dropping the scan future
//! - The pure orientation computation on good and degenerate readings

use std::time::Duration;

use floorsketch::core::scanner::{
    RoomScanner, SCAN_DURATION, SensorSnapshot, orientation,
};

#[tokio::test(start_paused = true)]
async fn test_scan_resolves_to_fixed_dimensions() {
    let scanner = RoomScanner::new();

    let started = tokio::time::Instant::now();
    let scanned = scanner.scan().await;

    // The simulated delay elapses (in virtual time) before the fixed
    // placeholder result arrives.
    assert!(started.elapsed() >= SCAN_DURATION);
    assert_eq!(scanned.name, "Scanned Room");
    assert_eq!(
        (scanned.width, scanned.length, scanned.height),
        (5.0, 4.0, 2.5)
    );
}

#[tokio::test(start_paused = true)]
async fn test_scan_is_cancelled_by_drop() {
    let scanner = RoomScanner::new();

    // Abandoning the request before the delay elapses drops the scan;
    // it never resolves.
    tokio::select! {
        _ = scanner.scan() => panic!("scan should not resolve before its delay"),
        () = tokio::time::sleep(Duration::from_secs(1)) => {}
    }
}

#[test]
fn test_orientation_flat_north_facing() {
    // Device lying flat, top edge pointing north: all angles are zero.
    let snapshot = SensorSnapshot {
        accelerometer: [0.0, 0.0, 9.81],
        magnetometer: [0.0, 21.2, -42.7],
    };
    let attitude = orientation(&snapshot).expect("reading is well-formed");
    assert!(attitude.azimuth.abs() < 1e-3);
    assert!(attitude.pitch.abs() < 1e-3);
    assert!(attitude.roll.abs() < 1e-3);
}

#[test]
fn test_orientation_flat_east_facing() {
    // Top edge pointing east: azimuth is +90 degrees, still level. The
    // horizontal field component lands on the device's -x axis.
    let snapshot = SensorSnapshot {
        accelerometer: [0.0, 0.0, 9.81],
        magnetometer: [-21.2, 0.0, -42.7],
    };
    let attitude = orientation(&snapshot).expect("reading is well-formed");
    assert!((attitude.azimuth - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
    assert!(attitude.pitch.abs() < 1e-3);
    assert!(attitude.roll.abs() < 1e-3);
}

#[test]
fn test_orientation_rejects_degenerate_readings() {
    // Free fall: no gravity vector to build the matrix from.
    let free_fall = SensorSnapshot {
        accelerometer: [0.0, 0.0, 0.0],
        magnetometer: [0.0, 21.2, -42.7],
    };
    assert!(orientation(&free_fall).is_none());

    // Field parallel to gravity: no east axis.
    let parallel = SensorSnapshot {
        accelerometer: [0.0, 0.0, 9.81],
        magnetometer: [0.0, 0.0, -42.7],
    };
    assert!(orientation(&parallel).is_none());
}
