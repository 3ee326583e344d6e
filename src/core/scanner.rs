use std::time::Duration;

/// How long a simulated scan takes before it resolves.
pub const SCAN_DURATION: Duration = Duration::from_secs(5);

/// One immutable motion/orientation reading, passed by value. The
/// sensor callback and the scan share no mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSnapshot {
    pub accelerometer: [f32; 3],
    pub magnetometer: [f32; 3],
}

/// Device attitude in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub azimuth: f32,
    pub pitch: f32,
    pub roll: f32,
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let n = norm(v);
    [v[0] / n, v[1] / n, v[2] / n]
}

/// Device orientation from a single reading, via the rotation matrix
/// spanned by the gravity and geomagnetic vectors (east = field x
/// gravity). `None` when the reading is degenerate: free fall, or a
/// field parallel to gravity.
pub fn orientation(snapshot: &SensorSnapshot) -> Option<Orientation> {
    let gravity = snapshot.accelerometer;
    let field = snapshot.magnetometer;

    let east = cross(field, gravity);
    if norm(east) < 0.1 {
        return None;
    }
    let east = normalize(east);
    let up = normalize(gravity);
    let north = cross(up, east);

    Some(Orientation {
        azimuth: east[1].atan2(north[1]),
        pitch: (-up[1]).asin(),
        roll: (-up[0]).atan2(up[2]),
    })
}

pub trait SensorSource {
    fn sample(&self) -> SensorSnapshot;
}

/// Stand-in sensor rig: a device lying flat, pointing roughly north.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSensors;

impl SensorSource for SimulatedSensors {
    fn sample(&self) -> SensorSnapshot {
        SensorSnapshot {
            accelerometer: [0.0, 0.0, 9.81],
            magnetometer: [0.0, 21.2, -42.7],
        }
    }
}

/// What a scan resolves to: a room-shaped result without identity or
/// owner, to be inserted by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedRoom {
    pub name: String,
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

/// Simulated room scanner. `scan` resolves to fixed placeholder
/// dimensions after [`SCAN_DURATION`]; cancelling is dropping the
/// future before it resolves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomScanner<S = SimulatedSensors> {
    source: S,
}

impl RoomScanner {
    pub fn new() -> Self {
        Self {
            source: SimulatedSensors,
        }
    }
}

impl<S: SensorSource> RoomScanner<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub async fn scan(&self) -> ScannedRoom {
        let reading = self.source.sample();
        if let Some(attitude) = orientation(&reading) {
            tracing::debug!(
                azimuth = f64::from(attitude.azimuth),
                pitch = f64::from(attitude.pitch),
                roll = f64::from(attitude.roll),
                "scan orientation fix"
            );
        }
        tokio::time::sleep(SCAN_DURATION).await;
        ScannedRoom {
            name: "Scanned Room".to_string(),
            width: 5.0,
            length: 4.0,
            height: 2.5,
        }
    }
}
