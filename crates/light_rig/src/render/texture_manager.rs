//! Texture Management
//!
//! Textures hold external resources, so they are handed out as handles and
//! must be released explicitly. A released handle is never reused and
//! releasing it again is a logged no-op.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Handle for a loaded texture resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture#{}", self.0)
    }
}

/// Decoded RGBA8 pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Tightly packed RGBA8 pixels
    pub pixels: Vec<u8>,
}

/// Texture errors
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    /// The source could not be read or decoded
    #[error("failed to load texture {path}: {reason}")]
    Load {
        /// Requested path
        path: PathBuf,
        /// Loader message
        reason: String,
    },
}

/// Source of texture pixels
pub trait TextureLoader {
    /// Load and decode the texture at `path`
    fn load(&mut self, path: &Path) -> Result<TextureData, TextureError>;
}

/// Loads textures from disk with the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageLoader;

impl TextureLoader for ImageLoader {
    fn load(&mut self, path: &Path) -> Result<TextureData, TextureError> {
        let image = image::open(path).map_err(|e| TextureError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rgba = image.to_rgba8();
        Ok(TextureData {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }
}

/// Information about a live texture
#[derive(Debug, Clone)]
pub struct TextureInfo {
    /// Texture handle
    pub handle: TextureHandle,
    /// Where the pixels came from
    pub source: PathBuf,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Owns every live texture
pub struct TextureManager {
    loader: Box<dyn TextureLoader>,
    /// Directory relative texture paths are resolved against
    asset_root: Option<PathBuf>,
    /// Live textures by handle
    textures: HashMap<TextureHandle, TextureInfo>,
    /// Next available texture handle
    next_handle: u32,
    /// Successful loads over the manager's lifetime
    loads: u64,
}

impl fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureManager")
            .field("asset_root", &self.asset_root)
            .field("live", &self.textures.len())
            .field("next_handle", &self.next_handle)
            .field("loads", &self.loads)
            .finish_non_exhaustive()
    }
}

impl Default for TextureManager {
    fn default() -> Self {
        Self::new(ImageLoader)
    }
}

impl TextureManager {
    /// Create a texture manager backed by `loader`
    pub fn new(loader: impl TextureLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            asset_root: None,
            textures: HashMap::new(),
            next_handle: 1, // Start from 1, reserve 0 for "no texture"
            loads: 0,
        }
    }

    /// Resolve relative texture paths against `root` instead of the working directory
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    /// Directory relative texture paths are resolved against
    pub fn asset_root(&self) -> Option<&Path> {
        self.asset_root.as_deref()
    }

    /// Path the loader is given for `path`
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match &self.asset_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Load a texture and return a fresh handle
    ///
    /// Every call loads again; nothing is cached across release/acquire.
    pub fn acquire(&mut self, path: impl AsRef<Path>) -> Result<TextureHandle, TextureError> {
        let resolved = self.resolve(path);
        let path = resolved.as_path();
        let data = self.loader.load(path)?;

        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.loads += 1;

        log::debug!("Acquired {} from {} ({}x{})", handle, path.display(), data.width, data.height);
        self.textures.insert(handle, TextureInfo {
            handle,
            source: path.to_path_buf(),
            width: data.width,
            height: data.height,
        });
        Ok(handle)
    }

    /// Release a texture; returns false if it was not live
    pub fn release(&mut self, handle: TextureHandle) -> bool {
        if self.textures.remove(&handle).is_some() {
            log::debug!("Released {}", handle);
            true
        } else {
            log::warn!("Ignoring release of {} which is not live", handle);
            false
        }
    }

    /// Whether `handle` refers to a live texture
    pub fn is_live(&self, handle: TextureHandle) -> bool {
        self.textures.contains_key(&handle)
    }

    /// Information about a live texture
    pub fn get(&self, handle: TextureHandle) -> Option<&TextureInfo> {
        self.textures.get(&handle)
    }

    /// Number of live textures
    pub fn live_count(&self) -> usize {
        self.textures.len()
    }

    /// Successful loads over the manager's lifetime
    pub fn total_loads(&self) -> u64 {
        self.loads
    }

    /// Release everything
    pub fn clear(&mut self) {
        if !self.textures.is_empty() {
            log::debug!("Releasing {} textures", self.textures.len());
        }
        self.textures.clear();
    }
}
