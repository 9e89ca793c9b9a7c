//! Transaction detection from payment screenshots.
//!
//! OCR and QR decoding are external collaborators consumed through the
//! [`TextReader`] and [`QrDecoder`] traits. Both are CPU-bound; hosts serving
//! many concurrent requests should run detection off the async scheduling
//! thread.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use image::{DynamicImage, GrayImage};
use tracing::{debug, info};

use crate::error::{DetectError, PdfError};
use crate::models::config::DetectConfig;
use crate::models::transaction::DetectionResult;
use crate::receipt::rules::patterns::TRANSACTION_ID;
use crate::receipt::rules::screenshot::extract_screenshot_fields;
use crate::text::normalize;

/// OCR collaborator: grayscale image to recognized text fragments. Fragment
/// order is not guaranteed stable across runs.
pub trait TextReader: Send + Sync {
    fn read_text(&self, image: &GrayImage) -> Result<Vec<String>, DetectError>;
}

/// QR collaborator: image region to zero or more decoded payload strings.
pub trait QrDecoder: Send + Sync {
    fn decode(&self, region: &DynamicImage) -> Result<Vec<String>, DetectError>;
}

// The OCR engine is expensive to initialize: installed once per process,
// reused across requests, never torn down.
static TEXT_READER: OnceLock<Arc<dyn TextReader>> = OnceLock::new();

/// Install the process-wide OCR engine. Later calls are no-ops.
pub fn install_text_reader(reader: Arc<dyn TextReader>) {
    if TEXT_READER.set(reader).is_ok() {
        info!("OCR engine installed");
    }
}

/// The installed process-wide OCR engine, if any.
pub fn text_reader() -> Option<Arc<dyn TextReader>> {
    TEXT_READER.get().cloned()
}

/// Detects transaction references and screenshot fields from an image.
pub struct TransactionDetector {
    reader: Arc<dyn TextReader>,
    qr: Arc<dyn QrDecoder>,
    config: DetectConfig,
}

impl TransactionDetector {
    pub fn new(reader: Arc<dyn TextReader>, qr: Arc<dyn QrDecoder>) -> Self {
        Self {
            reader,
            qr,
            config: DetectConfig::default(),
        }
    }

    /// Build a detector over the process-wide OCR engine installed via
    /// [`install_text_reader`].
    pub fn with_shared_reader(qr: Arc<dyn QrDecoder>) -> Result<Self, DetectError> {
        let reader = text_reader().ok_or(DetectError::NoReader)?;
        Ok(Self::new(reader, qr))
    }

    pub fn with_config(mut self, config: DetectConfig) -> Self {
        self.config = config;
        self
    }

    /// Run QR and OCR extraction over a screenshot and combine the results.
    /// The suffix comes from the caller; the screenshot itself never carries
    /// one.
    pub fn detect_transaction_id(
        &self,
        image_bytes: &[u8],
        manual_suffix: Option<&str>,
    ) -> Result<DetectionResult, DetectError> {
        let image = image::load_from_memory(image_bytes)?;

        let qr_transaction_id = self.detect_from_qr(&image)?;
        let mut fields = self.detect_from_text(&image)?;

        Ok(DetectionResult {
            qr_transaction_id,
            text_transaction_id: fields.remove("transaction_id"),
            payer: fields.remove("payer"),
            receiver: fields.remove("receiver"),
            date: fields.remove("date"),
            amount: fields.remove("amount"),
            suffix: manual_suffix.map(str::to_string),
        })
    }

    /// Crop the fixed QR window centered on the image, decode it, and scan
    /// each payload for a reference-code-shaped substring.
    pub fn detect_from_qr(&self, image: &DynamicImage) -> Result<Option<String>, DetectError> {
        let region = crop_centered(
            image,
            self.config.qr_window_width,
            self.config.qr_window_height,
        );

        for payload in self.qr.decode(&region)? {
            if let Some(found) = TRANSACTION_ID.find(&payload) {
                debug!("QR payload carries reference {}", found.as_str());
                return Ok(Some(found.as_str().to_string()));
            }
        }
        Ok(None)
    }

    /// OCR the full screenshot as grayscale and run the screenshot profile
    /// over the joined fragments.
    pub fn detect_from_text(
        &self,
        image: &DynamicImage,
    ) -> Result<BTreeMap<&'static str, String>, DetectError> {
        let gray = image.to_luma8();
        let fragments = self.reader.read_text(&gray)?;
        let text = normalize(&fragments.join(" "));
        debug!("OCR produced {} fragments, {} chars", fragments.len(), text.len());
        Ok(extract_screenshot_fields(&text))
    }

    /// Run the screenshot profile over a user-supplied PDF receipt.
    pub fn extract_from_pdf(
        &self,
        pdf_bytes: &[u8],
    ) -> Result<BTreeMap<&'static str, String>, PdfError> {
        let text = crate::pdf::extract_text(pdf_bytes)?;
        Ok(extract_screenshot_fields(&normalize(&text)))
    }
}

/// Crop a `w` x `h` window centered on the image, clamped to its bounds.
fn crop_centered(image: &DynamicImage, w: u32, h: u32) -> DynamicImage {
    let w = w.min(image.width());
    let h = h.min(image.height());
    let x = (image.width() - w) / 2;
    let y = (image.height() - h) / 2;
    image.crop_imm(x, y, w, h)
}
