// src/core/storage/defaults.rs
// Built-in content used to seed a collection when its storage entry is
// absent or corrupt at load time.

use crate::models::common::MediaType;
use crate::models::gallery::GalleryItem;
use crate::models::service_item::ServiceItem;
use crate::models::slideshow::SlideItem;

fn slide(id: &str, src: &str) -> SlideItem {
    SlideItem {
        id: id.to_string(),
        src: src.to_string(),
    }
}

pub fn home_slides() -> Vec<SlideItem> {
    vec![
        slide(
            "slide-default-1",
            "https://images.unsplash.com/photo-1558655146-364adaf1fcc9?q=80&w=1974&auto=format&fit=crop",
        ),
        slide(
            "slide-default-2",
            "https://images.unsplash.com/photo-1522199755839-a2bacb67c546?q=80&w=2072&auto=format&fit=crop",
        ),
        slide(
            "slide-default-3",
            "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?q=80&w=2070&auto=format&fit=crop",
        ),
    ]
}

pub fn portfolio_slides() -> Vec<SlideItem> {
    vec![
        slide(
            "portfolio-slide-default-1",
            "https://images.unsplash.com/photo-1519389950473-47ba0277781c?q=80&w=2070&auto=format&fit=crop",
        ),
        slide(
            "portfolio-slide-default-2",
            "https://images.unsplash.com/photo-1556742044-3c52d6e88c62?q=80&w=2070&auto=format&fit=crop",
        ),
    ]
}

pub fn about_slides() -> Vec<SlideItem> {
    vec![
        slide(
            "about-slide-default-1",
            "https://images.unsplash.com/photo-1522071820081-009f0129c7da?q=80&w=2070&auto=format&fit=crop",
        ),
        slide(
            "about-slide-default-2",
            "https://images.unsplash.com/photo-1552664730-d307ca884978?q=80&w=2070&auto=format&fit=crop",
        ),
    ]
}

pub fn gallery_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: "gallery-default-1".to_string(),
            media_type: MediaType::Image,
            src: "https://images.unsplash.com/photo-1512295767273-b684ac7658fa?q=80&w=1974&auto=format&fit=crop"
                .to_string(),
            title: "Modern Workspace Design".to_string(),
            file_type: "image/jpeg".to_string(),
        },
        GalleryItem {
            id: "gallery-default-2".to_string(),
            media_type: MediaType::Image,
            src: "https://images.unsplash.com/photo-1516116216624-53e6973bea12?q=80&w=2070&auto=format&fit=crop"
                .to_string(),
            title: "Creative Tools & Branding".to_string(),
            file_type: "image/jpeg".to_string(),
        },
        GalleryItem {
            id: "gallery-default-3".to_string(),
            media_type: MediaType::Video,
            src: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4".to_string(),
            title: "Design Process Reel".to_string(),
            file_type: "video/mp4".to_string(),
        },
        GalleryItem {
            id: "gallery-default-4".to_string(),
            media_type: MediaType::Image,
            src: "https://images.unsplash.com/photo-1626785774573-4b799315345d?q=80&w=2071&auto=format&fit=crop"
                .to_string(),
            title: "Digital Branding Mockup".to_string(),
            file_type: "image/jpeg".to_string(),
        },
    ]
}

pub fn service_items() -> Vec<ServiceItem> {
    let item = |id: &str, title: &str, description: &str| ServiceItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    };
    vec![
        item(
            "service-1",
            "Graphic Design",
            "Logos, brochures, business cards, posters, and all your marketing material needs. We create visually stunning graphics that capture attention.",
        ),
        item(
            "service-7",
            "3D LOGO Design",
            "Bring your brand to life with stunning 3D logos that stand out. We create dynamic and modern logos with depth and dimension.",
        ),
        item(
            "service-2",
            "Branding",
            "Comprehensive brand identity development, including strategy, guidelines, and visual assets to build a strong and memorable brand presence.",
        ),
        item(
            "service-3",
            "Printing",
            "High-quality printing services for business cards, flyers, banners, and other promotional materials. We ensure your designs look great on paper.",
        ),
        item(
            "service-4",
            "Interior Decoration",
            "Transforming residential and commercial spaces with creative and functional interior design solutions that reflect your style.",
        ),
        item(
            "service-5",
            "Fashion Design",
            "Innovative fashion design services, from concept development and sketching to pattern making and collection creation.",
        ),
        item(
            "service-6",
            "Web Design",
            "User-friendly, responsive, and aesthetically pleasing website design and development. We build engaging digital experiences.",
        ),
    ]
}
