/// Share payloads handed to the QR renderer and clipboard
use serde::Serialize;
use url::form_urlencoded::byte_serialize;

use crate::codec::to_share_locator;

/// Image endpoint that renders the QR code for a share locator
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Edge length of the rendered QR image, in pixels
pub const QR_SIZE: u32 = 180;

/// Everything the display layer needs to show or copy one export
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub locator: String,
    pub data_size: usize,
    pub qr_image_url: String,
}

impl SharePayload {
    pub fn new<S: AsRef<str>>(urls: &[S]) -> SharePayload {
        let locator = to_share_locator(urls);
        SharePayload {
            data_size: locator.len(),
            qr_image_url: qr_image_url(&locator, QR_SIZE),
            locator,
        }
    }
}

/// Request URL for a `size`×`size` QR image encoding `data`
pub fn qr_image_url(data: &str, size: u32) -> String {
    let encoded: String = byte_serialize(data.as_bytes()).collect();
    format!("{}?size={}x{}&data={}", QR_ENDPOINT, size, size, encoded)
}
