use std::{
    env, fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, Luma};
use qrcode::{EcLevel, QrCode};

use crate::{
    builder::EpcBuilder,
    error::{EpcError, EpcResult},
    types::{Encoding, ImageFormat},
};

// Render options
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub charset: Encoding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 300, height: 300, format: ImageFormat::Png, charset: Encoding::Utf8 }
    }
}

// Renderer capability
//------------------------------------------------------------------------------

pub trait QrImageRenderer {
    fn render_to_bytes(&self, text: &str, options: &RenderOptions) -> EpcResult<Vec<u8>>;

    fn render_to_file(
        &self,
        text: &str,
        options: &RenderOptions,
        path: &Path,
    ) -> EpcResult<PathBuf> {
        let bytes = self.render_to_bytes(text, options)?;
        fs::write(path, bytes).map_err(|err| EpcError::render_failure(&err))?;
        Ok(path.to_path_buf())
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct QrCodeRenderer;

impl QrImageRenderer for QrCodeRenderer {
    fn render_to_bytes(&self, text: &str, options: &RenderOptions) -> EpcResult<Vec<u8>> {
        let (payload, _, _) = options.charset.charset().encode(text);

        let code = QrCode::with_error_correction_level(&*payload, EcLevel::L)
            .map_err(|err| EpcError::render_failure(&err))?;
        let img = code
            .render::<Luma<u8>>()
            .min_dimensions(options.width, options.height)
            .quiet_zone(true)
            .build();

        let format = image::ImageFormat::from_extension(options.format.name()).ok_or_else(
            || EpcError::Render(format!("no encoder available for {}", options.format.name())),
        )?;
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut bytes), format)
            .map_err(|err| EpcError::render_failure(&err))?;
        Ok(bytes)
    }
}

// Generators
//------------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct Base64ImageGenerator<R = QrCodeRenderer> {
    options: RenderOptions,
    renderer: R,
}

impl Base64ImageGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: QrImageRenderer> Base64ImageGenerator<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self { options: RenderOptions::default(), renderer }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.options.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.options.height = height;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.options.format = format;
        self
    }

    pub fn generate(&self, builder: &EpcBuilder) -> EpcResult<String> {
        let text = builder.build()?;
        let options = RenderOptions { charset: builder.encoding(), ..self.options };
        let bytes = self.renderer.render_to_bytes(&text, &options)?;
        Ok(STANDARD.encode(bytes))
    }
}

#[derive(Debug, Clone)]
pub struct ImageFileGenerator<R = QrCodeRenderer> {
    options: RenderOptions,
    output_file: PathBuf,
    renderer: R,
}

impl ImageFileGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ImageFileGenerator {
    fn default() -> Self {
        Self::with_renderer(QrCodeRenderer)
    }
}

impl<R: QrImageRenderer> ImageFileGenerator<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            options: RenderOptions::default(),
            output_file: env::temp_dir().join("epc.png"),
            renderer,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.options.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.options.height = height;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.options.format = format;
        self
    }

    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }

    pub fn generate(&self, builder: &EpcBuilder) -> EpcResult<PathBuf> {
        let text = builder.build()?;
        let options = RenderOptions { charset: builder.encoding(), ..self.options };
        self.renderer.render_to_file(&text, &options, &self.output_file)
    }
}
