//! Static metadata for all 114 chapters.

use serde::Serialize;

/// Where a chapter was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

impl RevelationPlace {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevelationPlace::Meccan => "Meccan",
            RevelationPlace::Medinan => "Medinan",
        }
    }
}

impl std::fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one chapter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SurahInfo {
    pub number: u32,
    pub name: &'static str,
    pub english_name: &'static str,
    pub english_name_translation: &'static str,
    pub ayah_count: u32,
    pub revelation_place: RevelationPlace,
}

use RevelationPlace::{Meccan, Medinan};

macro_rules! surah {
    ($number:expr, $name:expr, $english:expr, $translation:expr, $ayahs:expr, $place:expr) => {
        SurahInfo {
            number: $number,
            name: $name,
            english_name: $english,
            english_name_translation: $translation,
            ayah_count: $ayahs,
            revelation_place: $place,
        }
    };
}

/// All 114 chapters in canonical order.
pub static SURAHS: [SurahInfo; 114] = [
    surah!(1, "الفاتحة", "Al-Fatihah", "The Opening", 7, Meccan),
    surah!(2, "البقرة", "Al-Baqarah", "The Cow", 286, Medinan),
    surah!(3, "آل عمران", "Ali 'Imran", "Family of Imran", 200, Medinan),
    surah!(4, "النساء", "An-Nisa", "The Women", 176, Medinan),
    surah!(5, "المائدة", "Al-Ma'idah", "The Table Spread", 120, Medinan),
    surah!(6, "الأنعام", "Al-An'am", "The Cattle", 165, Meccan),
    surah!(7, "الأعراف", "Al-A'raf", "The Heights", 206, Meccan),
    surah!(8, "الأنفال", "Al-Anfal", "The Spoils of War", 75, Medinan),
    surah!(9, "التوبة", "At-Tawbah", "The Repentance", 129, Medinan),
    surah!(10, "يونس", "Yunus", "Jonah", 109, Meccan),
    surah!(11, "هود", "Hud", "Hud", 123, Meccan),
    surah!(12, "يوسف", "Yusuf", "Joseph", 111, Meccan),
    surah!(13, "الرعد", "Ar-Ra'd", "The Thunder", 43, Medinan),
    surah!(14, "ابراهيم", "Ibrahim", "Abraham", 52, Meccan),
    surah!(15, "الحجر", "Al-Hijr", "The Rocky Tract", 99, Meccan),
    surah!(16, "النحل", "An-Nahl", "The Bee", 128, Meccan),
    surah!(17, "الإسراء", "Al-Isra", "The Night Journey", 111, Meccan),
    surah!(18, "الكهف", "Al-Kahf", "The Cave", 110, Meccan),
    surah!(19, "مريم", "Maryam", "Mary", 98, Meccan),
    surah!(20, "طه", "Taha", "Ta-Ha", 135, Meccan),
    surah!(21, "الأنبياء", "Al-Anbya", "The Prophets", 112, Meccan),
    surah!(22, "الحج", "Al-Hajj", "The Pilgrimage", 78, Medinan),
    surah!(23, "المؤمنون", "Al-Mu'minun", "The Believers", 118, Meccan),
    surah!(24, "النور", "An-Nur", "The Light", 64, Medinan),
    surah!(25, "الفرقان", "Al-Furqan", "The Criterion", 77, Meccan),
    surah!(26, "الشعراء", "Ash-Shu'ara", "The Poets", 227, Meccan),
    surah!(27, "النمل", "An-Naml", "The Ant", 93, Meccan),
    surah!(28, "القصص", "Al-Qasas", "The Stories", 88, Meccan),
    surah!(29, "العنكبوت", "Al-'Ankabut", "The Spider", 69, Meccan),
    surah!(30, "الروم", "Ar-Rum", "The Romans", 60, Meccan),
    surah!(31, "لقمان", "Luqman", "Luqman", 34, Meccan),
    surah!(32, "السجدة", "As-Sajdah", "The Prostration", 30, Meccan),
    surah!(33, "الأحزاب", "Al-Ahzab", "The Combined Forces", 73, Medinan),
    surah!(34, "سبإ", "Saba", "Sheba", 54, Meccan),
    surah!(35, "فاطر", "Fatir", "Originator", 45, Meccan),
    surah!(36, "يس", "Ya-Sin", "Ya Sin", 83, Meccan),
    surah!(37, "الصافات", "As-Saffat", "Those who set the Ranks", 182, Meccan),
    surah!(38, "ص", "Sad", "The Letter Saad", 88, Meccan),
    surah!(39, "الزمر", "Az-Zumar", "The Troops", 75, Meccan),
    surah!(40, "غافر", "Ghafir", "The Forgiver", 85, Meccan),
    surah!(41, "فصلت", "Fussilat", "Explained in Detail", 54, Meccan),
    surah!(42, "الشورى", "Ash-Shuraa", "The Consultation", 53, Meccan),
    surah!(43, "الزخرف", "Az-Zukhruf", "The Ornaments of Gold", 89, Meccan),
    surah!(44, "الدخان", "Ad-Dukhan", "The Smoke", 59, Meccan),
    surah!(45, "الجاثية", "Al-Jathiyah", "The Crouching", 37, Meccan),
    surah!(46, "الأحقاف", "Al-Ahqaf", "The Wind-Curved Sandhills", 35, Meccan),
    surah!(47, "محمد", "Muhammad", "Muhammad", 38, Medinan),
    surah!(48, "الفتح", "Al-Fath", "The Victory", 29, Medinan),
    surah!(49, "الحجرات", "Al-Hujurat", "The Rooms", 18, Medinan),
    surah!(50, "ق", "Qaf", "The Letter Qaf", 45, Meccan),
    surah!(51, "الذاريات", "Adh-Dhariyat", "The Winnowing Winds", 60, Meccan),
    surah!(52, "الطور", "At-Tur", "The Mount", 49, Meccan),
    surah!(53, "النجم", "An-Najm", "The Star", 62, Meccan),
    surah!(54, "القمر", "Al-Qamar", "The Moon", 55, Meccan),
    surah!(55, "الرحمن", "Ar-Rahman", "The Beneficent", 78, Medinan),
    surah!(56, "الواقعة", "Al-Waqi'ah", "The Inevitable", 96, Meccan),
    surah!(57, "الحديد", "Al-Hadid", "The Iron", 29, Medinan),
    surah!(58, "المجادلة", "Al-Mujadila", "The Pleading Woman", 22, Medinan),
    surah!(59, "الحشر", "Al-Hashr", "The Exile", 24, Medinan),
    surah!(60, "الممتحنة", "Al-Mumtahanah", "She that is to be examined", 13, Medinan),
    surah!(61, "الصف", "As-Saf", "The Ranks", 14, Medinan),
    surah!(62, "الجمعة", "Al-Jumu'ah", "The Congregation, Friday", 11, Medinan),
    surah!(63, "المنافقون", "Al-Munafiqun", "The Hypocrites", 11, Medinan),
    surah!(64, "التغابن", "At-Taghabun", "The Mutual Disillusion", 18, Medinan),
    surah!(65, "الطلاق", "At-Talaq", "The Divorce", 12, Medinan),
    surah!(66, "التحريم", "At-Tahrim", "The Prohibition", 12, Medinan),
    surah!(67, "الملك", "Al-Mulk", "The Sovereignty", 30, Meccan),
    surah!(68, "القلم", "Al-Qalam", "The Pen", 52, Meccan),
    surah!(69, "الحاقة", "Al-Haqqah", "The Reality", 52, Meccan),
    surah!(70, "المعارج", "Al-Ma'arij", "The Ascending Stairways", 44, Meccan),
    surah!(71, "نوح", "Nuh", "Noah", 28, Meccan),
    surah!(72, "الجن", "Al-Jinn", "The Jinn", 28, Meccan),
    surah!(73, "المزمل", "Al-Muzzammil", "The Enshrouded One", 20, Meccan),
    surah!(74, "المدثر", "Al-Muddaththir", "The Cloaked One", 56, Meccan),
    surah!(75, "القيامة", "Al-Qiyamah", "The Resurrection", 40, Meccan),
    surah!(76, "الانسان", "Al-Insan", "The Man", 31, Medinan),
    surah!(77, "المرسلات", "Al-Mursalat", "The Emissaries", 50, Meccan),
    surah!(78, "النبإ", "An-Naba", "The Tidings", 40, Meccan),
    surah!(79, "النازعات", "An-Nazi'at", "Those who drag forth", 46, Meccan),
    surah!(80, "عبس", "'Abasa", "He Frowned", 42, Meccan),
    surah!(81, "التكوير", "At-Takwir", "The Overthrowing", 29, Meccan),
    surah!(82, "الإنفطار", "Al-Infitar", "The Cleaving", 19, Meccan),
    surah!(83, "المطففين", "Al-Mutaffifin", "The Defrauding", 36, Meccan),
    surah!(84, "الإنشقاق", "Al-Inshiqaq", "The Sundering", 25, Meccan),
    surah!(85, "البروج", "Al-Buruj", "The Mansions of the Stars", 22, Meccan),
    surah!(86, "الطارق", "At-Tariq", "The Nightcomer", 17, Meccan),
    surah!(87, "الأعلى", "Al-A'la", "The Most High", 19, Meccan),
    surah!(88, "الغاشية", "Al-Ghashiyah", "The Overwhelming", 26, Meccan),
    surah!(89, "الفجر", "Al-Fajr", "The Dawn", 30, Meccan),
    surah!(90, "البلد", "Al-Balad", "The City", 20, Meccan),
    surah!(91, "الشمس", "Ash-Shams", "The Sun", 15, Meccan),
    surah!(92, "الليل", "Al-Layl", "The Night", 21, Meccan),
    surah!(93, "الضحى", "Ad-Duhaa", "The Morning Hours", 11, Meccan),
    surah!(94, "الشرح", "Ash-Sharh", "The Relief", 8, Meccan),
    surah!(95, "التين", "At-Tin", "The Fig", 8, Meccan),
    surah!(96, "العلق", "Al-'Alaq", "The Clot", 19, Meccan),
    surah!(97, "القدر", "Al-Qadr", "The Power", 5, Meccan),
    surah!(98, "البينة", "Al-Bayyinah", "The Clear Proof", 8, Medinan),
    surah!(99, "الزلزلة", "Az-Zalzalah", "The Earthquake", 8, Medinan),
    surah!(100, "العاديات", "Al-'Adiyat", "The Courser", 11, Meccan),
    surah!(101, "القارعة", "Al-Qari'ah", "The Calamity", 11, Meccan),
    surah!(102, "التكاثر", "At-Takathur", "The Rivalry in world increase", 8, Meccan),
    surah!(103, "العصر", "Al-'Asr", "The Declining Day", 3, Meccan),
    surah!(104, "الهمزة", "Al-Humazah", "The Traducer", 9, Meccan),
    surah!(105, "الفيل", "Al-Fil", "The Elephant", 5, Meccan),
    surah!(106, "قريش", "Quraysh", "Quraysh", 4, Meccan),
    surah!(107, "الماعون", "Al-Ma'un", "The Small kindnesses", 7, Meccan),
    surah!(108, "الكوثر", "Al-Kawthar", "The Abundance", 3, Meccan),
    surah!(109, "الكافرون", "Al-Kafirun", "The Disbelievers", 6, Meccan),
    surah!(110, "النصر", "An-Nasr", "The Divine Support", 3, Medinan),
    surah!(111, "المسد", "Al-Masad", "The Palm Fiber", 5, Meccan),
    surah!(112, "الإخلاص", "Al-Ikhlas", "The Sincerity", 4, Meccan),
    surah!(113, "الفلق", "Al-Falaq", "The Daybreak", 5, Meccan),
    surah!(114, "الناس", "An-Nas", "Mankind", 6, Meccan),
];

/// Look up chapter metadata by number.
pub fn surah_info(number: u32) -> Option<&'static SurahInfo> {
    if number == 0 || number > SURAHS.len() as u32 {
        return None;
    }
    Some(&SURAHS[(number - 1) as usize])
}

/// Filter chapters by a free-text query.
///
/// Matches the Arabic name, English name, name translation, or the chapter
/// number itself, case-insensitively.
pub fn search_surahs(query: &str) -> Vec<&'static SurahInfo> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SURAHS.iter().collect();
    }
    SURAHS
        .iter()
        .filter(|s| {
            s.name.contains(&needle)
                || s.english_name.to_lowercase().contains(&needle)
                || s.english_name_translation.to_lowercase().contains(&needle)
                || s.number.to_string() == needle
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(SURAHS.len(), 114);
        for (i, surah) in SURAHS.iter().enumerate() {
            assert_eq!(surah.number as usize, i + 1);
            assert!(surah.ayah_count > 0);
        }
    }

    #[test]
    fn test_total_verse_count() {
        let total: u32 = SURAHS.iter().map(|s| s.ayah_count).sum();
        assert_eq!(total, 6236);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(surah_info(1).unwrap().english_name, "Al-Fatihah");
        assert_eq!(surah_info(114).unwrap().ayah_count, 6);
        assert!(surah_info(0).is_none());
        assert!(surah_info(115).is_none());
    }

    #[test]
    fn test_search_by_translation() {
        let results = search_surahs("the cow");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].number, 2);
    }

    #[test]
    fn test_search_by_number() {
        let results = search_surahs("36");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].english_name, "Ya-Sin");
    }
}
