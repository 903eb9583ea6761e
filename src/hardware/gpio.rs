//! esp-idf-svc の型付きGPIOペリフェラルによるカメラピンバンドル

use esp_idf_svc::hal::gpio::{
    Gpio10, Gpio11, Gpio12, Gpio13, Gpio14, Gpio15, Gpio16, Gpio17, Gpio18, Gpio38, Gpio39,
    Gpio40, Gpio47, Gpio48,
};

use super::pins::CameraPinMap;

/// カメラインターフェースが占有するGPIOペリフェラル一式
///
/// 型がボード配線そのものを表すため、誤ったピンを渡すとコンパイルエラーに
/// なります。XIAO ESP32S3 Sense のカメラには PWDN / RESET 線が配線されて
/// いないため、対応するフィールドは存在しません。
pub struct CameraPins {
    pub xclk: Gpio10,
    pub d0: Gpio15,
    pub d1: Gpio17,
    pub d2: Gpio18,
    pub d3: Gpio16,
    pub d4: Gpio14,
    pub d5: Gpio12,
    pub d6: Gpio11,
    pub d7: Gpio48,
    pub vsync: Gpio38,
    pub href: Gpio47,
    pub pclk: Gpio13,
    pub sda: Gpio40,
    pub scl: Gpio39,
}

impl CameraPins {
    /// Peripherals から取り出した個別のピンで作成
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        xclk: Gpio10,
        d0: Gpio15,
        d1: Gpio17,
        d2: Gpio18,
        d3: Gpio16,
        d4: Gpio14,
        d5: Gpio12,
        d6: Gpio11,
        d7: Gpio48,
        vsync: Gpio38,
        href: Gpio47,
        pclk: Gpio13,
        sda: Gpio40,
        scl: Gpio39,
    ) -> Self {
        Self {
            xclk,
            d0,
            d1,
            d2,
            d3,
            d4,
            d5,
            d6,
            d7,
            vsync,
            href,
            pclk,
            sda,
            scl,
        }
    }

    /// このバンドルに対応する数値ピンマップ
    ///
    /// 生のGPIO番号を要求するドライバへ渡す際に使います。
    pub const fn numeric_map(&self) -> CameraPinMap {
        CameraPinMap::xiao_esp32s3_sense()
    }
}
