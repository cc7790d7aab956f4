// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.native_name, self.name)
    }
}

pub static LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English", native_name: "English" },
    Language { code: "hi", name: "Hindi", native_name: "हिन्दी" },
    Language { code: "gu", name: "Gujarati", native_name: "ગુજરાતી" },
    Language { code: "te", name: "Telugu", native_name: "తెలుగు" },
    Language { code: "ta", name: "Tamil", native_name: "தமிழ்" },
    Language { code: "bn", name: "Bengali", native_name: "বাংলা" },
    Language { code: "mr", name: "Marathi", native_name: "मराठी" },
    Language { code: "zh", name: "Chinese", native_name: "中文" },
    Language { code: "es", name: "Spanish", native_name: "Español" },
    Language { code: "fr", name: "French", native_name: "Français" },
    Language { code: "ar", name: "Arabic", native_name: "العربية" },
    Language { code: "pt", name: "Portuguese", native_name: "Português" },
    Language { code: "ru", name: "Russian", native_name: "Русский" },
    Language { code: "ja", name: "Japanese", native_name: "日本語" },
    Language { code: "ko", name: "Korean", native_name: "한국어" },
    Language { code: "de", name: "German", native_name: "Deutsch" },
];

type Table = HashMap<&'static str, &'static str>;

static TRANSLATIONS: Lazy<HashMap<&'static str, Table>> = Lazy::new(|| {
    let mut all = HashMap::new();
    all.insert(
        "en",
        Table::from([
            ("app.title", "FinWise"),
            ("app.tagline", "Invest and finance wisely"),
            ("auth.signin", "Sign In"),
            ("auth.signup", "Sign Up"),
            ("auth.email", "Email"),
            ("auth.password", "Password"),
            ("auth.fullName", "Full Name"),
            ("auth.phone", "Phone Number"),
            ("auth.welcome", "Welcome to FinWise"),
            ("nav.wallet", "Wallet"),
            ("nav.ecoplanning", "EcoPlanning"),
            ("nav.settings", "Settings"),
            ("common.menu", "Menu"),
            ("common.loading", "Loading..."),
            ("common.add", "Add"),
            ("common.save", "Save"),
            ("common.cancel", "Cancel"),
        ]),
    );
    all.insert(
        "hi",
        Table::from([
            ("app.title", "फिनवाइज"),
            ("app.tagline", "समझदारी से निवेश और वित्त प्रबंधन करें"),
            ("auth.signin", "साइन इन करें"),
            ("auth.signup", "साइन अप करें"),
            ("auth.email", "ईमेल"),
            ("auth.password", "पासवर्ड"),
            ("auth.fullName", "पूरा नाम"),
            ("auth.phone", "फोन नंबर"),
            ("auth.welcome", "फिनवाइज में आपका स्वागत है"),
            ("nav.wallet", "वॉलेट"),
            ("nav.ecoplanning", "इकोप्लानिंग"),
            ("nav.settings", "सेटिंग्स"),
            ("common.menu", "मेनू"),
            ("common.loading", "लोड हो रहा है..."),
            ("common.add", "जोड़ें"),
            ("common.save", "सहेजें"),
            ("common.cancel", "रद्द करें"),
        ]),
    );
    all.insert(
        "gu",
        Table::from([
            ("app.title", "ફિનવાઇઝ"),
            ("app.tagline", "સમજદારીથી રોકાણ અને નાણાં વ્યવસ્થાપન"),
            ("auth.signin", "સાઇન ઇન કરો"),
            ("auth.signup", "સાઇન અપ કરો"),
            ("auth.email", "ઇમેઇલ"),
            ("auth.password", "પાસવર્ડ"),
            ("auth.fullName", "પૂરું નામ"),
            ("auth.phone", "ફોન નંબર"),
            ("auth.welcome", "ફિનવાઇઝમાં આપનું સ્વાગત છે"),
            ("nav.wallet", "વૉલેટ"),
            ("nav.ecoplanning", "ઇકોપ્લાનિંગ"),
            ("nav.settings", "સેટિંગ્સ"),
            ("common.menu", "મેનૂ"),
            ("common.loading", "લોડ થઈ રહ્યું છે..."),
            ("common.add", "ઉમેરો"),
            ("common.save", "સેવ કરો"),
            ("common.cancel", "રદ કરો"),
        ]),
    );
    all
});

/// Key lookup in the active language, then English, then the key itself.
#[derive(Debug, Clone)]
pub struct Translator {
    current: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            current: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Translator {
    pub fn new(language: &str) -> Self {
        let mut t = Self::default();
        t.set_language(language);
        t
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        TRANSLATIONS
            .get(self.current.as_str())
            .and_then(|table| table.get(key))
            .or_else(|| {
                TRANSLATIONS
                    .get(DEFAULT_LANGUAGE)
                    .and_then(|table| table.get(key))
            })
            .copied()
            .unwrap_or(key)
    }

    /// Switches only to languages that have a translation table; returns whether it did.
    pub fn set_language(&mut self, code: &str) -> bool {
        if TRANSLATIONS.contains_key(code) {
            self.current = code.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_language(&self) -> &str {
        &self.current
    }

    pub fn supported_languages(&self) -> &'static [Language] {
        LANGUAGES
    }

    pub fn language(code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|l| l.code == code)
    }
}
