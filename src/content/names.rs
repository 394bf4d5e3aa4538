//! The 99 Names of Allah with Arabic script and English meanings.

/// One entry in the reference list of Names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivineName {
    pub id: u8,
    /// Latin transliteration (e.g. "Ar-Rahmān")
    pub name: &'static str,
    /// Arabic script
    pub arabic: &'static str,
    /// English meaning
    pub meaning: &'static str,
}

const fn name(id: u8, name: &'static str, arabic: &'static str, meaning: &'static str) -> DivineName {
    DivineName { id, name, arabic, meaning }
}

pub const ALLAH_NAMES: [DivineName; 99] = [
    name(1, "Ar-Rahmān", "الرَّحْمَنُ", "The Most or Entirely Merciful"),
    name(2, "Ar-Rahīm", "الرَّحِيمُ", "The Bestower of Mercy"),
    name(3, "Al-Malik", "الْمَلِكُ", "The King and Owner of Dominion"),
    name(4, "Al-Quddūs", "الْقُدُّوسُ", "The Absolutely Pure"),
    name(5, "As-Salām", "السَّلَامُ", "The Source of Peace"),
    name(6, "Al-Mu'min", "الْمُؤْمِنُ", "The Giver of Security"),
    name(7, "Al-Muhaymin", "الْمُهَيْمِنُ", "The Watchful, The Overseer"),
    name(8, "Al-'Azīz", "الْعَزِيزُ", "The Almighty, The Exalted"),
    name(9, "Al-Jabbār", "الْجَبَّارُ", "The Restorer, The Compeller"),
    name(10, "Al-Mutakabbir", "الْمُتَكَبِّرُ", "The Supreme, The Majestic"),
    name(11, "Al-Khāliq", "الْخَالِقُ", "The Creator, The Maker"),
    name(12, "Al-Bāri'", "الْبَارِئُ", "The Originator"),
    name(13, "Al-Muṣawwir", "الْمُصَوِّرُ", "The Fashioner"),
    name(14, "Al-Ghaffār", "الْغَفَّارُ", "The Constant Forgiver"),
    name(15, "Al-Qahhār", "الْقَهَّارُ", "The Subduer, The Ever-Dominating"),
    name(16, "Al-Wahhāb", "الْوَهَّابُ", "The Giver of Gifts"),
    name(17, "Ar-Razzāq", "الرَّزَّاقُ", "The Ever-Providing"),
    name(18, "Al-Fattāḥ", "الْفَتَّاحُ", "The Opener, The Judge"),
    name(19, "Al-'Alīm", "الْعَلِيمُ", "The All-Knowing"),
    name(20, "Al-Qābiḍ", "الْقَابِضُ", "The Withholder"),
    name(21, "Al-Bāsiṭ", "الْبَاسِطُ", "The Extender"),
    name(22, "Al-Khāfiḍ", "الْخَافِضُ", "The Reducer"),
    name(23, "Ar-Rāfi'", "الرَّافِعُ", "The Exalter"),
    name(24, "Al-Mu'izz", "الْمُعِزُّ", "The Bestower of Honour"),
    name(25, "Al-Mudhill", "الْمُذِلُّ", "The Humiliator"),
    name(26, "As-Samī'", "السَّمِيعُ", "The All-Hearing"),
    name(27, "Al-Baṣīr", "الْبَصِيرُ", "The All-Seeing"),
    name(28, "Al-Ḥakam", "الْحَكَمُ", "The Judge"),
    name(29, "Al-'Adl", "الْعَدْلُ", "The Utterly Just"),
    name(30, "Al-Laṭīf", "اللَّطِيفُ", "The Subtle One, The Most Gentle"),
    name(31, "Al-Khabīr", "الْخَبِيرُ", "The All-Aware"),
    name(32, "Al-Ḥalīm", "الْحَلِيمُ", "The Most Forbearing"),
    name(33, "Al-'Aẓīm", "الْعَظِيمُ", "The Magnificent"),
    name(34, "Al-Ghafūr", "الْغَفُورُ", "The All-Forgiving"),
    name(35, "Ash-Shakūr", "الشَّكُورُ", "The Most Appreciative"),
    name(36, "Al-'Alī", "الْعَلِيُّ", "The Most High"),
    name(37, "Al-Kabīr", "الْكَبِيرُ", "The Greatest"),
    name(38, "Al-Ḥafīẓ", "الْحَفِيظُ", "The Preserver"),
    name(39, "Al-Muqīt", "الْمُقِيتُ", "The Sustainer"),
    name(40, "Al-Ḥasīb", "الْحَسِيبُ", "The Reckoner"),
    name(41, "Al-Jalīl", "الْجَلِيلُ", "The Majestic"),
    name(42, "Al-Karīm", "الْكَرِيمُ", "The Most Generous"),
    name(43, "Ar-Raqīb", "الرَّقِيبُ", "The Watchful"),
    name(44, "Al-Mujīb", "الْمُجِيبُ", "The Responder to Prayer"),
    name(45, "Al-Wāsi'", "الْوَاسِعُ", "The All-Encompassing"),
    name(46, "Al-Ḥakīm", "الْحَكِيمُ", "The All-Wise"),
    name(47, "Al-Wadūd", "الْوَدُودُ", "The Most Loving"),
    name(48, "Al-Majīd", "الْمَجِيدُ", "The Glorious"),
    name(49, "Al-Bā'ith", "الْبَاعِثُ", "The Resurrector"),
    name(50, "Ash-Shahīd", "الشَّهِيدُ", "The Witness"),
    name(51, "Al-Ḥaqq", "الْحَقُّ", "The Truth"),
    name(52, "Al-Wakīl", "الْوَكِيلُ", "The Trustee, The Disposer of Affairs"),
    name(53, "Al-Qawī", "الْقَوِيُّ", "The All-Strong"),
    name(54, "Al-Matīn", "الْمَتِينُ", "The Firm, The Steadfast"),
    name(55, "Al-Walī", "الْوَلِيُّ", "The Protecting Associate"),
    name(56, "Al-Ḥamīd", "الْحَمِيدُ", "The Praiseworthy"),
    name(57, "Al-Muḥṣī", "الْمُحْصِي", "The All-Enumerating"),
    name(58, "Al-Mubdi'", "الْمُبْدِئُ", "The Originator"),
    name(59, "Al-Mu'īd", "الْمُعِيدُ", "The Restorer"),
    name(60, "Al-Muḥyī", "الْمُحْيِي", "The Giver of Life"),
    name(61, "Al-Mumīt", "الْمُمِيتُ", "The Taker of Life"),
    name(62, "Al-Ḥayy", "الْحَيُّ", "The Ever-Living"),
    name(63, "Al-Qayyūm", "الْقَيُّومُ", "The Self-Subsisting"),
    name(64, "Al-Wājid", "الْوَاجِدُ", "The Perceiver"),
    name(65, "Al-Mājid", "الْمَاجِدُ", "The Illustrious, the Magnificent"),
    name(66, "Al-Wāḥid", "الْوَاحِدُ", "The One"),
    name(67, "Al-Aḥad", "الْأَحَدُ", "The Unique"),
    name(68, "Aṣ-Ṣamad", "الصَّمَدُ", "The Eternal, The Independent"),
    name(69, "Al-Qādir", "الْقَادِرُ", "The All-Powerful"),
    name(70, "Al-Muqtadir", "الْمُقْتَدِرُ", "The All-Determiner"),
    name(71, "Al-Muqaddim", "الْمُقَدِّمُ", "The Promoter, The Expediter"),
    name(72, "Al-Mu'akhkhir", "الْمُؤَخِّرُ", "The Delayer"),
    name(73, "Al-'Awwal", "الْأَوَّلُ", "The First"),
    name(74, "Al-'Ākhir", "الْآخِرُ", "The Last"),
    name(75, "Aẓ-Ẓāhir", "الظَّاهِرُ", "The Manifest"),
    name(76, "Al-Bāṭin", "الْبَاطِنُ", "The Hidden"),
    name(77, "Al-Wālī", "الْوَالِي", "The Governor, The Patron"),
    name(78, "Al-Muta'ālī", "الْمُتَعَالِي", "The Self-Exalted"),
    name(79, "Al-Barr", "الْبَرُّ", "The Source of All Goodness"),
    name(80, "At-Tawwāb", "التَّوَّابُ", "The Ever-Acceptor of Repentance"),
    name(81, "Al-Muntaqim", "الْمُنْتَقِمُ", "The Avenger"),
    name(82, "Al-'Afūw", "الْعَفُوُّ", "The Pardoner"),
    name(83, "Ar-Ra'ūf", "الرَّءُوفُ", "The Most Kind"),
    name(84, "Mālik-ul-Mulk", "مَالِكُ الْمُلْكِ", "Master of the Kingdom"),
    name(85, "Dhūl-Jalāli wal-'Ikrām", "ذُو الْجَلَالِ وَالْإِكْرَامِ", "Lord of Majesty and Honour"),
    name(86, "Al-Muqsiṭ", "الْمُقْسِطُ", "The Equitable"),
    name(87, "Al-Jāmi'", "الْجَامِعُ", "The Gatherer, The Uniter"),
    name(88, "Al-Ghanī", "الْغَنِيُّ", "The Self-Sufficient"),
    name(89, "Al-Mughnī", "الْمُغْنِي", "The Enricher"),
    name(90, "Al-Māni'", "الْمَانِعُ", "The Withholder"),
    name(91, "Aḍ-Ḍārr", "الضَّارُّ", "The Distresser"),
    name(92, "An-Nāfi'", "النَّافِعُ", "The Bestower of Benefits"),
    name(93, "An-Nūr", "النُّورُ", "The Light"),
    name(94, "Al-Hādī", "الْهَادِي", "The Guide"),
    name(95, "Al-Badī'", "الْبَدِيعُ", "The Incomparable Originator"),
    name(96, "Al-Bāqī", "الْبَاقِي", "The Everlasting"),
    name(97, "Al-Wārith", "الْوَارِثُ", "The Ultimate Inheritor"),
    name(98, "Ar-Rashīd", "الرَّشِيدُ", "The Guide to the Right Path"),
    name(99, "Aṣ-Ṣabūr", "الصَّبُورُ", "The Most Patient"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ninety_nine_names() {
        assert_eq!(ALLAH_NAMES.len(), 99);
    }

    #[test]
    fn test_ids_are_sequential() {
        for (i, entry) in ALLAH_NAMES.iter().enumerate() {
            assert_eq!(entry.id as usize, i + 1);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = ALLAH_NAMES.iter().map(|n| n.name).collect();
        assert_eq!(names.len(), ALLAH_NAMES.len());
    }

    #[test]
    fn test_meanings_present() {
        for entry in &ALLAH_NAMES {
            assert!(!entry.meaning.is_empty(), "name {} missing meaning", entry.id);
            assert!(!entry.arabic.is_empty(), "name {} missing script", entry.id);
        }
    }
}
