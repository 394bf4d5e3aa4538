//! The Arabic alphabet reference set.
//!
//! Each entry carries the isolated glyph, its name, transliteration, a
//! pedagogical example word drawn from the Quran or the Names, and the four
//! contextual forms. The quiz engine treats this as an opaque ordered slice;
//! nothing here is mutable at runtime.

use crate::domain::{LetterEntry, LetterForms};

const fn letter(
    glyph: &'static str,
    name: &'static str,
    transliteration: &'static str,
    example_word: &'static str,
    example_translation: &'static str,
    example_meaning: &'static str,
    isolated: &'static str,
    initial: &'static str,
    medial: &'static str,
    word_final: &'static str,
) -> LetterEntry {
    LetterEntry {
        glyph,
        name,
        transliteration,
        example_word,
        example_translation,
        example_meaning,
        forms: LetterForms {
            isolated,
            initial,
            medial,
            word_final,
        },
    }
}

pub const ALPHABET: [LetterEntry; 28] = [
    letter("ا", "Alif", "a, ā", "ٱلْفَاتِحَة", "Al-Fatiha", "The Opening", "ا", "ا", "ـا", "ـا"),
    letter("ب", "Ba", "b", "ٱلْبَقَرَة", "Al-Baqarah", "The Cow", "ب", "بـ", "ـبـ", "ـب"),
    letter("ت", "Ta", "t", "ٱلتَّوَّاب", "At-Tawwāb", "The Ever-Acceptor of Repentance", "ت", "تـ", "ـتـ", "ـت"),
    letter("ث", "Tha", "th", "ٱلْوَارِث", "Al-Wārith", "The Ultimate Inheritor", "ث", "ثـ", "ـثـ", "ـث"),
    letter("ج", "Jim", "j", "ٱلْجَلِيل", "Al-Jalīl", "The Majestic", "ج", "جـ", "ـجـ", "ـج"),
    letter("ح", "Ha", "ḥ", "ٱلْحَمِيد", "Al-Ḥamīd", "The Praiseworthy", "ح", "حـ", "ـحـ", "ـح"),
    letter("خ", "Kha", "kh", "ٱلْخَالِق", "Al-Khāliq", "The Creator", "خ", "خـ", "ـخـ", "ـخ"),
    letter("د", "Dal", "d", "ٱلْوَدُود", "Al-Wadūd", "The Most Loving", "د", "د", "ـد", "ـد"),
    letter("ذ", "Dhal", "dh", "ذُو ٱلْجَلَالِ", "Dhūl-Jalāli", "Lord of Majesty", "ذ", "ذ", "ـذ", "ـذ"),
    letter("ر", "Ra", "r", "ٱلرَّحْمَـٰن", "Ar-Raḥmān", "The Most Merciful", "ر", "ر", "ـر", "ـر"),
    letter("ز", "Zain", "z", "ٱلْعَزِيز", "Al-'Azīz", "The Almighty", "ز", "ز", "ـز", "ـز"),
    letter("س", "Sin", "s", "ٱلسَّلَام", "As-Salām", "The Source of Peace", "س", "سـ", "ـسـ", "ـس"),
    letter("ش", "Shin", "sh", "ٱلشَّهِيد", "Ash-Shahīd", "The Witness", "ش", "شـ", "ـشـ", "ـش"),
    letter("ص", "Sad", "ṣ", "ٱلصَّمَد", "Aṣ-Ṣamad", "The Eternal", "ص", "صـ", "ـصـ", "ـص"),
    letter("ض", "Dad", "ḍ", "ٱلضَّارّ", "Aḍ-Ḍārr", "The Distresser", "ض", "ضـ", "ـضـ", "ـض"),
    letter("ط", "Ta", "ṭ", "ٱلْبَاطِن", "Al-Bāṭin", "The Hidden", "ط", "طـ", "ـطـ", "ـط"),
    letter("ظ", "Dha", "ẓ", "ٱلظَّاهِر", "Aẓ-Ẓāhir", "The Manifest", "ظ", "ظـ", "ـظـ", "ـظ"),
    letter("ع", "Ain", "ʿ", "ٱلْعَلِيم", "Al-'Alīm", "The All-Knowing", "ع", "عـ", "ـعـ", "ـع"),
    letter("غ", "Ghain", "gh", "ٱلْغَفُور", "Al-Ghafūr", "The All-Forgiving", "غ", "غـ", "ـغـ", "ـغ"),
    letter("ف", "Fa", "f", "ٱلْفَتَّاح", "Al-Fattāḥ", "The Opener", "ف", "فـ", "ـفـ", "ـف"),
    letter("ق", "Qaf", "q", "ٱلْقُدُّوس", "Al-Quddūs", "The Absolutely Pure", "ق", "قـ", "ـقـ", "ـق"),
    letter("ك", "Kaf", "k", "ٱلْكَرِيم", "Al-Karīm", "The Most Generous", "ك", "كـ", "ـكـ", "ـك"),
    letter("ل", "Lam", "l", "ٱلَّذِي", "Alladhī", "The One Who", "ل", "لـ", "ـلـ", "ـل"),
    letter("م", "Mim", "m", "ٱلْمَلِك", "Al-Malik", "The King", "م", "مـ", "ـمـ", "ـم"),
    letter("ن", "Nun", "n", "ٱلنُّور", "An-Nūr", "The Light", "ن", "نـ", "ـنـ", "ـن"),
    letter("ه", "Ha", "h", "ٱلْهَادِي", "Al-Hādī", "The Guide", "ه", "هـ", "ـهـ", "ـه"),
    letter("و", "Waw", "w, ū", "ٱلْوَهَّاب", "Al-Wahhāb", "The Giver of Gifts", "و", "و", "ـو", "ـو"),
    letter("ي", "Ya", "y, ī", "يَـٰسٓ", "Yā-Sīn", "Ya Sin", "ي", "يـ", "ـيـ", "ـي"),
];
