// Image slots and the local/remote source resolver
use serde::Serialize;

/// Compile-time default for serving images from `/images` instead of the remote placeholders.
pub const USE_LOCAL_IMAGES: bool = cfg!(feature = "local-images");

const LOCAL_PREFIX: &str = "/images/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    pub file: &'static str,
    pub fallback_url: &'static str,
    pub alt: &'static str,
}

impl ImageSlot {
    pub const fn new(file: &'static str, fallback_url: &'static str, alt: &'static str) -> Self {
        Self {
            file,
            fallback_url,
            alt,
        }
    }
}

pub const SERVER: ImageSlot = ImageSlot::new(
    "server.jpg",
    "https://images.unsplash.com/photo-1581092921461-eab62e97a780?q=80&w=1600&auto=format&fit=crop",
    "Data servers",
);

pub const ANALYTICS: ImageSlot = ImageSlot::new(
    "analytics.jpg",
    "https://images.unsplash.com/photo-1551281044-8af0d9d66036?q=80&w=1600&auto=format&fit=crop",
    "Enterprise analytics dashboard",
);

pub const BIG_DATA: ImageSlot = ImageSlot::new(
    "bigdata.jpg",
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=1600&auto=format&fit=crop",
    "Big data visualization",
);

pub const CLOUD: ImageSlot = ImageSlot::new(
    "cloud.jpg",
    "https://images.unsplash.com/photo-1509395176047-4a66953fd231?q=80&w=1600&auto=format&fit=crop",
    "Cloud technology",
);

pub const ARCHITECTURE: ImageSlot = ImageSlot::new(
    "architecture.jpg",
    "https://images.unsplash.com/photo-1627308595187-94328b0a67a3?q=80&w=1600&auto=format&fit=crop",
    "Architecture diagram",
);

/// Picks the local path or the remote fallback for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageResolver {
    use_local: bool,
}

impl ImageResolver {
    pub const fn new(use_local: bool) -> Self {
        Self { use_local }
    }

    pub const fn uses_local(&self) -> bool {
        self.use_local
    }

    pub fn resolve(&self, slot: &ImageSlot) -> String {
        resolve(self.use_local, slot.file, slot.fallback_url)
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(USE_LOCAL_IMAGES)
    }
}

pub fn resolve(use_local: bool, file: &str, fallback: &str) -> String {
    if use_local {
        format!("{}{}", LOCAL_PREFIX, file)
    } else {
        fallback.to_string()
    }
}
