//! Fixed user-facing string tables.
//!
//! Each [`Language`] maps to one static [`Strings`] table. Adding a field to
//! `Strings` forces every table to provide it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caption of the language selector, readable in every supported language.
pub const LANGUAGE_PROMPT: &str = "🌐 Язык / Language / Til";

/// A supported interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Russian.
    #[default]
    Ru,
    /// English.
    En,
    /// Karakalpak, in Latin script.
    Kk,
}

/// Error returned when parsing an unknown language code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language code {0:?}, expected one of ru, en, kk")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Languages in selector order.
    pub const ALL: [Self; 3] = [Self::Ru, Self::En, Self::Kk];

    /// Returns the two-letter code of the language.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
            Self::Kk => "kk",
        }
    }

    /// Returns the name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Ru => "Русский",
            Self::En => "English",
            Self::Kk => "Қарақалпақша",
        }
    }

    /// Returns the string table of the language.
    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Ru => &RU,
            Self::En => &EN,
            Self::Kk => &KK,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| UnknownLanguage(code.to_owned()))
    }
}

/// Every user-facing string of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub alpha: &'static str,
    pub beta: &'static str,
    pub gamma: &'static str,
    pub delta: &'static str,
    pub x0: &'static str,
    pub y0: &'static str,
    pub duration: &'static str,
    pub dt: &'static str,
    pub prey: &'static str,
    pub predator: &'static str,
    pub time: &'static str,
    pub population: &'static str,
    pub populations_over_time: &'static str,
    pub phase_portrait: &'static str,
    pub download_csv: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub model: &'static str,
    pub lotka_volterra: &'static str,
    pub logistic_lv: &'static str,
}

impl Strings {
    /// Column headers of the exported table: time, prey, predator.
    #[must_use]
    pub fn columns(&self) -> [&'static str; 3] {
        [self.time, self.prey, self.predator]
    }
}

static RU: Strings = Strings {
    title: "Модель хищник–жертва",
    alpha: "α (рост жертв)",
    beta: "β (поедание)",
    gamma: "γ (смертность хищников)",
    delta: "δ (превращение жертв в хищников)",
    x0: "Начальное число жертв",
    y0: "Начальное число хищников",
    duration: "Время моделирования",
    dt: "Шаг времени",
    prey: "Жертвы",
    predator: "Хищники",
    time: "Время",
    population: "Популяция",
    populations_over_time: "Популяции во времени",
    phase_portrait: "Фазовый портрет",
    download_csv: "Скачать результаты в CSV",
    language: "Язык",
    theme: "Тема",
    light: "Светлая",
    dark: "Тёмная",
    model: "Модель",
    lotka_volterra: "Классическая Лотка–Вольтерра",
    logistic_lv: "Логистическая модель с ограничением ресурсов",
};

static EN: Strings = Strings {
    title: "Predator-Prey Model",
    alpha: "α (prey growth rate)",
    beta: "β (predation rate)",
    gamma: "γ (predator death rate)",
    delta: "δ (predator reproduction rate)",
    x0: "Initial prey population",
    y0: "Initial predator population",
    duration: "Simulation time",
    dt: "Time step",
    prey: "Prey",
    predator: "Predators",
    time: "Time",
    population: "Population",
    populations_over_time: "Populations over time",
    phase_portrait: "Phase portrait",
    download_csv: "Download results as CSV",
    language: "Language",
    theme: "Theme",
    light: "Light",
    dark: "Dark",
    model: "Model",
    lotka_volterra: "Classic Lotka–Volterra",
    logistic_lv: "Logistic model with resource limit",
};

static KK: Strings = Strings {
    title: "Jirtqish-jalıwshi modeli",
    alpha: "α (óljeniń ósiw tezligi)",
    beta: "β (jirtqishliq tezligi)",
    gamma: "γ (jirtqish ólim koefficienti)",
    delta: "δ (jirtqish kóbeyiw tezligi)",
    x0: "Dáslepki jemtik populyaciyası",
    y0: "Jirtqishlardın dáslepki sanı",
    duration: "Simulyaciya waqtı",
    dt: "Waqıt qádemi",
    prey: "ólje",
    predator: "Jirtqishlar",
    time: "Waqit",
    population: "Populyaciya",
    populations_over_time: "Zamana boyinsha populyaciyalar",
    phase_portrait: "Faza portreti",
    download_csv: "CSV túrinde nátiyjelerdi júklep alıw",
    language: "Til",
    theme: "Tema",
    light: "jaqtılıq",
    dark: "Qarańǵı",
    model: "Model",
    lotka_volterra: "Classic Lotka-Volterra",
    logistic_lv: "Resource limitli logistika modeli",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
        assert_eq!(" EN ".parse::<Language>(), Ok(Language::En));
    }

    #[test]
    fn unknown_code_is_rejected() {
        let error = "de".parse::<Language>().unwrap_err();

        assert_eq!(error, UnknownLanguage("de".to_owned()));
        assert!(error.to_string().contains("ru, en, kk"));
    }

    #[test]
    fn column_headers_are_localized() {
        assert_eq!(
            Language::En.strings().columns(),
            ["Time", "Prey", "Predators"]
        );
        assert_eq!(
            Language::Ru.strings().columns(),
            ["Время", "Жертвы", "Хищники"]
        );
        assert_eq!(
            Language::Kk.strings().columns(),
            ["Waqit", "ólje", "Jirtqishlar"]
        );
    }

    #[test]
    fn column_headers_identify_their_language() {
        for language in Language::ALL {
            let matches = Language::ALL
                .iter()
                .filter(|other| other.strings().columns() == language.strings().columns())
                .count();
            assert_eq!(matches, 1, "{language} headers are ambiguous");
        }
    }

    #[test]
    fn defaults_to_russian() {
        assert_eq!(Language::default(), Language::Ru);
        assert_eq!(Language::default().native_name(), "Русский");
    }
}
