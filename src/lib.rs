/*!
 * # XIAO ESP32S3 Camera Pins
 *
 * Seeed XIAO ESP32S3 Sense ボードのカメラモジュール用 GPIO ピン割り当てを
 * 定義するライブラリ
 *
 * ## モジュール構成
 * - `hardware`: ピン割り当てテーブル、信号役割定義、型付きGPIOバンドル
 *
 * ピン割り当てはビルド時に確定する定数であり、実行時に生成・変更される
 * ことはありません。ハードウェアの設定自体（カメラ初期化やバスタイミング）は
 * このクレートの対象外で、利用側のファームウェアが行います。
 */

pub mod hardware;

// 内部で使用する型をまとめてエクスポート
pub use hardware::pins::*;
pub use hardware::signal::{log_assignments, CameraSignal, PinMapError};
#[cfg(feature = "esp")]
pub use hardware::gpio::CameraPins;

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
