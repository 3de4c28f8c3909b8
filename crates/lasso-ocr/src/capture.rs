use lasso_types::SelectionRect;
use thiserror::Error;
use xcap::Monitor;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no monitor available")]
    NoMonitor,
    #[error("selection lies outside every monitor")]
    OutOfBounds,
    #[error("screen capture failed: {0}")]
    Backend(String),
    #[error("image encoding failed: {0}")]
    Encode(String),
}

/// Pixels grabbed for one selection, PNG-encoded. Owned by the pipeline
/// invocation that produced it.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Map a selection in logical coordinates onto a monitor's physical pixel
/// grid: translate into the monitor's frame, scale, clamp to the capture.
///
/// Returns `None` when nothing of the selection remains after clamping.
pub fn to_physical(
    rect: SelectionRect,
    monitor_origin: (i32, i32),
    scale: f32,
    capture_size: (u32, u32),
) -> Option<(u32, u32, u32, u32)> {
    let local_x = ((rect.x - monitor_origin.0) as f32 * scale).round() as i64;
    let local_y = ((rect.y - monitor_origin.1) as f32 * scale).round() as i64;
    let width = (rect.width as f32 * scale).round() as i64;
    let height = (rect.height as f32 * scale).round() as i64;

    let x0 = local_x.max(0);
    let y0 = local_y.max(0);
    let x1 = (local_x + width).min(capture_size.0 as i64);
    let y1 = (local_y + height).min(capture_size.1 as i64);

    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
}

/// Bounds plus primary flag of one monitor, as fed to [`monitor_index`].
type MonitorBounds = (i32, i32, u32, u32, bool);

/// Index of the monitor containing the selection centre; falls back to
/// the primary monitor, then the first.
fn monitor_index(monitors: &[MonitorBounds], rect: SelectionRect) -> Option<usize> {
    let cx = rect.x + rect.width as i32 / 2;
    let cy = rect.y + rect.height as i32 / 2;
    monitors
        .iter()
        .position(|&(x, y, width, height, _)| {
            cx >= x && cy >= y && cx < x + width as i32 && cy < y + height as i32
        })
        .or_else(|| monitors.iter().position(|&(_, _, _, _, primary)| primary))
        .or(if monitors.is_empty() { None } else { Some(0) })
}

/// Grab the pixels under `rect` (logical screen coordinates) and encode
/// them as PNG. `enhance` runs the grayscale/contrast pass first.
pub fn capture_region(rect: SelectionRect, enhance: bool) -> Result<CapturedImage, CaptureError> {
    let monitors = Monitor::all().map_err(|e| CaptureError::Backend(e.to_string()))?;

    let bounds: Vec<MonitorBounds> = monitors
        .iter()
        .map(|m| (m.x(), m.y(), m.width(), m.height(), m.is_primary()))
        .collect();
    let monitor = monitor_index(&bounds, rect)
        .map(|i| &monitors[i])
        .ok_or(CaptureError::NoMonitor)?;

    let image = monitor
        .capture_image()
        .map_err(|e| CaptureError::Backend(e.to_string()))?;

    let scale = monitor.scale_factor();
    let (x, y, width, height) = to_physical(
        rect,
        (monitor.x(), monitor.y()),
        scale,
        (image.width(), image.height()),
    )
    .ok_or(CaptureError::OutOfBounds)?;

    tracing::debug!(
        x,
        y,
        width,
        height,
        scale,
        monitor = monitor.name(),
        "capturing selection"
    );

    let mut cropped = xcap::image::imageops::crop_imm(&image, x, y, width, height).to_image();
    if enhance {
        cropped = crate::enhance::enhance_for_ocr(&cropped);
    }

    Ok(CapturedImage {
        width: cropped.width(),
        height: cropped.height(),
        png: encode_png(&cropped)?,
    })
}

fn encode_png(image: &xcap::image::RgbaImage) -> Result<Vec<u8>, CaptureError> {
    use xcap::image::ImageEncoder;
    let mut buffer = Vec::new();
    xcap::image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            xcap::image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| CaptureError::Encode(e.to_string()))?;
    Ok(buffer)
}
