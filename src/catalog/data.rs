//! Compiled-in sample content: tracks, blog posts and contact channels.

use super::model::{Category, MediaRef, Track, TrackId};

struct TrackSeed {
    id: u32,
    title: &'static str,
    category: Category,
    duration: &'static str,
    price: u32,
    description: &'static str,
    media: &'static str,
}

const TRACKS: &[TrackSeed] = &[
    TrackSeed {
        id: 1,
        title: "Весёлый ёжик",
        category: Category::Children,
        duration: "2:30",
        price: 299,
        description: "Детская песня о приключениях весёлого ёжика",
        media: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
    },
    TrackSeed {
        id: 2,
        title: "Радуга после дождя",
        category: Category::Children,
        duration: "3:15",
        price: 299,
        description: "Добрая мелодия о красоте природы",
        media: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
    },
    TrackSeed {
        id: 3,
        title: "Осенний вальс",
        category: Category::Adult,
        duration: "4:20",
        price: 499,
        description: "Лирическая композиция об осени",
        media: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
    },
    TrackSeed {
        id: 4,
        title: "Дорога домой",
        category: Category::Adult,
        duration: "3:45",
        price: 499,
        description: "Трогательная песня о возвращении",
        media: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
    },
    TrackSeed {
        id: 5,
        title: "Ave Maria",
        category: Category::Choral,
        duration: "5:30",
        price: 799,
        description: "Хоровая обработка классической молитвы",
        media: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-5.mp3",
    },
    TrackSeed {
        id: 6,
        title: "Реквием для хора",
        category: Category::Choral,
        duration: "8:00",
        price: 899,
        description: "Торжественное хоровое произведение",
        media: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-6.mp3",
    },
    TrackSeed {
        id: 7,
        title: "Симфония No.1",
        category: Category::Orchestral,
        duration: "12:00",
        price: 1299,
        description: "Оркестровая симфония в 3 частях",
        media: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-7.mp3",
    },
    TrackSeed {
        id: 8,
        title: "Концерт для скрипки",
        category: Category::Orchestral,
        duration: "15:30",
        price: 1499,
        description: "Виртуозный скрипичный концерт",
        media: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-8.mp3",
    },
];

/// Build the session's track list from the compiled-in seeds.
pub fn sample_tracks() -> Vec<Track> {
    TRACKS
        .iter()
        .map(|s| Track {
            id: TrackId(s.id),
            title: s.title.to_string(),
            category: s.category,
            duration: s.duration.to_string(),
            price: s.price,
            description: s.description.to_string(),
            media: MediaRef::parse(s.media),
        })
        .collect()
}

/// A short post shown in the "about" popup.
#[derive(Copy, Clone, Debug)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "О процессе создания музыки",
        date: "15 октября 2024",
        excerpt: "Как рождается мелодия и что вдохновляет композитора...",
    },
    BlogPost {
        title: "Работа с хором",
        date: "3 октября 2024",
        excerpt: "Особенности написания хоровых партитур и аранжировок...",
    },
];

/// Ways to get in touch, in display order.
pub const CONTACT_CHANNELS: &[&str] = &["Email", "Телефон", "Telegram"];
