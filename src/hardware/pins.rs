//! XIAO ESP32S3 Sense カメラモジュールのピン割り当てテーブル
//!
//! ここで定義する値はボード固有の固定値で、プロセスの生存期間を通じて
//! 不変です。実際にGPIOを設定するのは利用側のカメラドライバです。

/// 物理ピンが配線されていないことを示すセンチネル値
///
/// この値が割り当てられた信号線は、このボードには存在しないため
/// 初期化処理で駆動してはいけません。
pub const NO_PIN: i32 = -1;

/// ESP32-S3 で有効な最大GPIO番号
pub const MAX_GPIO_NUM: i32 = 48;

// このボードのカメラモジュールには PWDN / RESET の制御線が配線されていない
pub const PWDN_PIN: i32 = NO_PIN;
pub const RESET_PIN: i32 = NO_PIN;

/// カメラへ供給する外部クロック (XCLK)
pub const XCLK_PIN: i32 = 10;
/// 制御バス クロック線 (SCL)
pub const SCL_PIN: i32 = 39;
/// 制御バス データ線 (SDA)
pub const SDA_PIN: i32 = 40;

// 8ビットパラレルデータバス (D0-D7)
pub const D0_PIN: i32 = 15;
pub const D1_PIN: i32 = 17;
pub const D2_PIN: i32 = 18;
pub const D3_PIN: i32 = 16;
pub const D4_PIN: i32 = 14;
pub const D5_PIN: i32 = 12;
pub const D6_PIN: i32 = 11;
pub const D7_PIN: i32 = 48;

/// 垂直同期 (VSYNC)
pub const VSYNC_PIN: i32 = 38;
/// 水平基準 (HREF)
pub const HREF_PIN: i32 = 47;
/// ピクセルクロック出力 (PCLK)
pub const PCLK_PIN: i32 = 13;

/*
 * 参考: SDカードインターフェースの代替ピン割り当て
 * 既定のピンで動作しない場合はこちらを試すこともできる:
 *
 *   CS: GPIO 4 / MOSI: GPIO 6 / MISO: GPIO 5 / SCK: GPIO 3
 *
 * デフォルトのSPIピンを使う場合:
 *   CS: GPIO 21 / MOSI: GPIO 8 / MISO: GPIO 9 / SCK: GPIO 7
 *
 * 現在の構成には配線されていない（情報としての記載のみ）。
 */

/// カメラピン割り当てマップ
///
/// 上記の定数を1つの値にまとめたもの。生のGPIO番号を受け取る
/// カメラドライバへそのまま渡せます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPinMap {
    pub pwdn: i32,
    pub reset: i32,
    pub xclk: i32,
    pub scl: i32,
    pub sda: i32,
    pub data: [i32; 8],
    pub vsync: i32,
    pub href: i32,
    pub pclk: i32,
}

impl CameraPinMap {
    /// XIAO ESP32S3 Sense の正規ピン割り当てを返す
    pub const fn xiao_esp32s3_sense() -> Self {
        Self {
            pwdn: PWDN_PIN,
            reset: RESET_PIN,
            xclk: XCLK_PIN,
            scl: SCL_PIN,
            sda: SDA_PIN,
            data: [
                D0_PIN, D1_PIN, D2_PIN, D3_PIN, D4_PIN, D5_PIN, D6_PIN, D7_PIN,
            ],
            vsync: VSYNC_PIN,
            href: HREF_PIN,
            pclk: PCLK_PIN,
        }
    }
}
