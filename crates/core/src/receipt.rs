//! Receipt file naming and the public upload layout.
//!
//! Stored receipts are named from the upload time in epoch milliseconds plus
//! the extension of the original file, and are referenced from the database
//! by their public path under [`PUBLIC_UPLOAD_PREFIX`].
//!
//! Two uploads with the same extension inside the same millisecond get the
//! same name; the later write replaces the earlier file.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Extensions offered by the form's file picker. Not enforced by the server.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// URL prefix under which stored receipts are served.
pub const PUBLIC_UPLOAD_PREFIX: &str = "/uploads";

/// Filename prefix for stored receipts.
const FILENAME_PREFIX: &str = "receipt-";

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Extension of an uploaded file: the text after the last `.`.
///
/// A name without any `.` yields the whole name.
///
/// ```
/// use reimburse_core::receipt::file_extension;
///
/// assert_eq!(file_extension("lunch.receipt.png"), "png");
/// assert_eq!(file_extension("scan"), "scan");
/// ```
pub fn file_extension(original_name: &str) -> &str {
    original_name.rsplit('.').next().unwrap_or(original_name)
}

/// Stored filename for a receipt uploaded at `epoch_millis`.
///
/// Convention: `receipt-{epoch_millis}.{ext}`
pub fn receipt_filename(original_name: &str, epoch_millis: i64) -> String {
    format!(
        "{FILENAME_PREFIX}{epoch_millis}.{}",
        file_extension(original_name)
    )
}

/// Public path recorded for a stored receipt, e.g. `/uploads/receipt-1.png`.
pub fn public_path(filename: &str) -> String {
    format!("{PUBLIC_UPLOAD_PREFIX}/{filename}")
}

// ---------------------------------------------------------------------------
// File picker filter
// ---------------------------------------------------------------------------

/// Whether `name` carries one of [`ACCEPTED_EXTENSIONS`] (case-insensitive).
pub fn is_accepted_extension(name: &str) -> bool {
    if !name.contains('.') {
        return false;
    }
    let ext = file_extension(name).to_ascii_lowercase();
    ACCEPTED_EXTENSIONS.contains(&ext.as_str())
}

/// MIME type sent with a receipt part, derived from its extension.
pub fn content_type_for(name: &str) -> &'static str {
    match file_extension(name).to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}
