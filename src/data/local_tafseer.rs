//! Bundled tafseer text for critical chapters.
//!
//! Serves as the terminal fallback when every remote endpoint fails.
//! Verse texts are stored in order, so verse N lives at index N-1.

/// Al-Fatihah (chapter 1)
static FATIHAH: [&str; 7] = [
    "In the Name of Allah, the Most Gracious, the Most Merciful. This is the opening of the \
     Quran and the greatest chapter, containing praise of Allah and a prayer for guidance.",
    "All praise and thanks are due to Allah alone, the Lord and Sustainer of all that exists, \
     Who created, maintains, and will judge all creation.",
    "The Most Gracious, the Most Merciful - These are two of the most beautiful names of \
     Allah, emphasizing His infinite mercy and compassion.",
    "Master of the Day of Judgment - Allah is the ultimate authority on the Day when all will \
     be held accountable for their deeds.",
    "You alone we worship, and You alone we ask for help - This declares exclusive worship \
     and dependence upon Allah alone.",
    "Guide us to the straight path - A prayer for divine guidance to the correct way of life \
     that leads to Allah's pleasure.",
    "The path of those You have blessed, not of those who have incurred Your wrath, nor of \
     those who have gone astray - The path of the righteous, avoiding the way of those who \
     knew the truth but rejected it, and those who were misguided.",
];

/// Al-Ikhlas (chapter 112)
static IKHLAS: [&str; 4] = [
    "Say: He is Allah, the One! - This declares the absolute oneness and uniqueness of Allah, \
     rejecting any form of polytheism or association of partners with Allah.",
    "Allah, the Eternal, Absolute - Allah is As-Samad, meaning He is the One to Whom all \
     creation turns in their needs, and He needs nothing from anyone.",
    "He begets not, nor is He begotten - Allah does not have children, parents, or family \
     relations. He is beyond human characteristics and relationships.",
    "And there is none like unto Him - Nothing in creation resembles Allah in His essence, \
     attributes, or actions. He is absolutely unique and incomparable.",
];

/// Al-Falaq (chapter 113)
static FALAQ: [&str; 5] = [
    "Say: I seek refuge with the Lord of the dawn - Seeking protection from Allah, Who is the \
     Creator and Controller of the daybreak and all new beginnings.",
    "From the mischief of created things - Protection from all forms of evil that exist in \
     creation, whether visible or hidden.",
    "From the mischief of darkness as it overspreads - Seeking refuge from the evils that \
     emerge and spread during the darkness of night.",
    "From the mischief of those who practice witchcraft - Protection from those who engage in \
     magic, sorcery, and other harmful occult practices.",
    "And from the mischief of the envious when he envies - Seeking refuge from the harm \
     caused by jealous and envious people who wish ill upon others.",
];

/// An-Nas (chapter 114)
static NAS: [&str; 6] = [
    "Say: I seek refuge with the Lord and Cherisher of mankind - Seeking protection from \
     Allah in His capacity as the Creator, Sustainer, and Guardian of all humanity.",
    "The King (or Ruler) of mankind - Allah is the ultimate Sovereign and Ruler over all \
     human beings, with absolute authority and control.",
    "The God (or Judge) of mankind - Allah is the only true deity worthy of worship, and the \
     ultimate Judge of all human actions.",
    "From the mischief of the Whisperer (of Evil), who withdraws (after his whisper) - \
     Protection from Satan and evil influences that whisper temptations and then hide.",
    "The same who whispers into the hearts of mankind - Seeking refuge from evil suggestions \
     that are planted in human hearts and minds.",
    "Among Jinns and among men - Protection from evil influences that come from both the \
     unseen world (jinn) and from human beings.",
];

fn chapter_texts(chapter: u32) -> Option<&'static [&'static str]> {
    match chapter {
        1 => Some(&FATIHAH),
        112 => Some(&IKHLAS),
        113 => Some(&FALAQ),
        114 => Some(&NAS),
        _ => None,
    }
}

/// Bundled tafseer for a specific verse, if present.
pub fn lookup(chapter: u32, verse: u32) -> Option<&'static str> {
    let index = verse.checked_sub(1)? as usize;
    chapter_texts(chapter)?.get(index).copied()
}

/// Whether the bundled dataset covers a chapter.
pub fn has_chapter(chapter: u32) -> bool {
    chapter_texts(chapter).is_some()
}

/// Chapters present in the bundled dataset, ascending.
pub fn available_chapters() -> &'static [u32] {
    &[1, 112, 113, 114]
}
