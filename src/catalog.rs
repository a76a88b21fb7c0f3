// src/catalog.rs
//! Stock avatars and talking-avatar voices offered by the studio.

use serde::Serialize;

pub struct AvatarGroup {
    pub name: &'static str,
    pub label: &'static str,
    pub assets: &'static [&'static str],
}

pub const AVATAR_GROUPS: &[AvatarGroup] = &[
    AvatarGroup {
        name: "male",
        label: "Male",
        assets: &["/avatars/male/male1.jpg", "/avatars/male/male2.jpg"],
    },
    AvatarGroup {
        name: "female",
        label: "Female",
        assets: &["/avatars/female/female1.png", "/avatars/female/female2.png"],
    },
    AvatarGroup {
        name: "business",
        label: "Business",
        assets: &["/avatars/business/business1.png"],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const VOICES: &[VoiceOption] = &[
    VoiceOption { id: "en-US-JennyNeural", label: "Female – Jenny (US)" },
    VoiceOption { id: "en-US-AriaNeural", label: "Female – Aria (US)" },
    VoiceOption { id: "en-US-GuyNeural", label: "Male – Guy (US)" },
    VoiceOption { id: "en-US-DavisNeural", label: "Male – Davis (US)" },
    VoiceOption { id: "en-IN-NeerjaNeural", label: "Female – Neerja (IN)" },
    VoiceOption { id: "en-IN-PrabhatNeural", label: "Male – Prabhat (IN)" },
];

/// Join the deployment origin and a relative asset path with exactly one
/// slash, so the provider can fetch the image itself.
pub fn avatar_url(base_url: &str, asset_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        asset_path.trim_start_matches('/')
    )
}

pub fn find_voice(id: &str) -> Option<&'static VoiceOption> {
    VOICES.iter().find(|voice| voice.id == id)
}

#[derive(Debug, Serialize)]
pub struct CatalogAvatar {
    pub path: &'static str,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogGroup {
    pub name: &'static str,
    pub label: &'static str,
    pub avatars: Vec<CatalogAvatar>,
}

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub avatar_groups: Vec<CatalogGroup>,
    pub voices: &'static [VoiceOption],
    pub default_voice: &'static str,
}

pub fn catalog(base_url: &str) -> Catalog {
    let avatar_groups = AVATAR_GROUPS
        .iter()
        .map(|group| CatalogGroup {
            name: group.name,
            label: group.label,
            avatars: group
                .assets
                .iter()
                .map(|&path| CatalogAvatar {
                    path,
                    url: avatar_url(base_url, path),
                })
                .collect(),
        })
        .collect();

    Catalog {
        avatar_groups,
        voices: VOICES,
        default_voice: crate::models::DEFAULT_TALK_VOICE,
    }
}
