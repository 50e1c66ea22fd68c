//! Avatar Component
//!
//! Round user badge: the user's image when one loads, otherwise a single
//! initial. The initial is always rendered first and the image is layered on
//! top only after it has loaded, so a slow or broken URL never leaves the
//! badge empty.

use leptos::*;

/// Glyph shown when a user has no usable name
pub const FALLBACK_GLYPH: &str = "U";

/// The three avatar size presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    /// Box size and text size classes for the preset
    pub fn classes(self) -> &'static str {
        match self {
            AvatarSize::Small => "w-8 h-8 text-xs",
            AvatarSize::Medium => "w-10 h-10 text-sm",
            AvatarSize::Large => "w-16 h-16 text-xl",
        }
    }
}

/// First character of the name, uppercased, or [`FALLBACK_GLYPH`]
pub fn fallback_glyph(name: Option<&str>) -> String {
    name.map(str::trim)
        .and_then(|n| n.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| FALLBACK_GLYPH.to_string())
}

/// The image URI to render, if it is present and non-blank
pub fn image_source(image: Option<&str>) -> Option<String> {
    image
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string)
}

/// User avatar badge
#[component]
pub fn UserAvatar(
    /// Display name used for the initial and alt text
    #[prop(into)]
    name: Option<String>,
    /// Avatar image URI
    #[prop(into)]
    image: Option<String>,
    #[prop(optional)]
    size: AvatarSize,
) -> impl IntoView {
    let glyph = fallback_glyph(name.as_deref());
    let alt = name.clone().unwrap_or_else(|| "User avatar".to_string());
    let source = image_source(image.as_deref());

    let (loaded, set_loaded) = create_signal(false);
    let (failed, set_failed) = create_signal(false);

    view! {
        <span
            class=format!(
                "relative inline-flex shrink-0 items-center justify-center overflow-hidden \
                 rounded-full bg-primary-700 font-semibold text-white select-none {}",
                size.classes()
            )
            title=alt.clone()
        >
            // Declared default content
            <span aria-hidden="true">{glyph}</span>

            {move || {
                source.clone().filter(|_| !failed.get()).map(|src| view! {
                    <img
                        src=src
                        alt=alt.clone()
                        class=move || {
                            if loaded.get() {
                                "absolute inset-0 w-full h-full object-cover"
                            } else {
                                "absolute inset-0 w-full h-full object-cover invisible"
                            }
                        }
                        on:load=move |_| set_loaded.set(true)
                        on:error=move |_| set_failed.set(true)
                    />
                })
            }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_glyph_uses_first_letter() {
        assert_eq!(fallback_glyph(Some("jane cooper")), "J");
        assert_eq!(fallback_glyph(Some("Alex")), "A");
        assert_eq!(fallback_glyph(Some("  sarah")), "S");
        assert_eq!(fallback_glyph(Some("élodie")), "É");
    }

    #[test]
    fn test_fallback_glyph_without_name() {
        assert_eq!(fallback_glyph(None), "U");
        assert_eq!(fallback_glyph(Some("")), "U");
        assert_eq!(fallback_glyph(Some("   ")), "U");
    }

    #[test]
    fn test_image_source_ignores_blank() {
        assert_eq!(image_source(None), None);
        assert_eq!(image_source(Some("")), None);
        assert_eq!(image_source(Some("  ")), None);
        assert_eq!(
            image_source(Some("https://i.pravatar.cc/150?u=jane")).as_deref(),
            Some("https://i.pravatar.cc/150?u=jane")
        );
    }

    #[test]
    fn test_size_presets_are_distinct() {
        let sizes = [AvatarSize::Small, AvatarSize::Medium, AvatarSize::Large];
        for (i, a) in sizes.iter().enumerate() {
            for b in &sizes[i + 1..] {
                assert_ne!(a.classes(), b.classes());
            }
        }
        assert_eq!(AvatarSize::default(), AvatarSize::Medium);
    }
}
