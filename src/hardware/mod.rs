/// ハードウェア定義モジュール
pub mod pins;
pub mod signal;

#[cfg(feature = "esp")]
pub mod gpio;

#[cfg(feature = "esp")]
pub use gpio::CameraPins;
pub use pins::{CameraPinMap, NO_PIN};
pub use signal::{CameraSignal, PinMapError};
