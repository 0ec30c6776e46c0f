//! Translation lookup for user-facing store messages.
//!
//! Messages are addressed by [`MessageKey`] and resolved per [`Locale`].
//! Sinhala and Tamil cover the notification titles; anything without a
//! translation falls back to English.

use crate::common::labels::labeled_enum;

labeled_enum! {
    pub enum Locale as "locale" {
        En => "en",
        Si => "si",
        Ta => "ta",
    }
}

impl Locale {
    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Si => "සිංහල",
            Locale::Ta => "தமிழ்",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ReportSubmittedTitle,
    ReportSubmittedOnline,
    ReportSubmittedOffline,
    ReportDeletedTitle,
    ReportDeletedBody,
    VolunteerRegisteredTitle,
    VolunteerRegisteredBody,
    VolunteerDeletedBody,
    SupportAddedTitle,
    SupportAddedBody,
    SupportDeletedBody,
    EntryDeletedTitle,
    OfflineTitle,
    OfflineBody,
    OnlineTitle,
    OnlineBody,
    OfflineBanner,
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        ReportSubmittedTitle => "Report Submitted",
        ReportSubmittedOnline => "Your report has been added to the relief dashboard.",
        ReportSubmittedOffline => "You are offline. The report is on this device's dashboard only.",
        ReportDeletedTitle => "Report Deleted",
        ReportDeletedBody => "The report has been removed from the system.",
        VolunteerRegisteredTitle => "Registered Successfully",
        VolunteerRegisteredBody => "Thank you for joining the relief effort.",
        VolunteerDeletedBody => "Volunteer entry removed.",
        SupportAddedTitle => "Support Entry Added",
        SupportAddedBody => "Your entry has been added to the public pool.",
        SupportDeletedBody => "Support entry removed.",
        EntryDeletedTitle => "Entry Deleted",
        OfflineTitle => "You are Offline",
        OfflineBody => "New entries are kept on this device only.",
        OnlineTitle => "Back Online",
        OnlineBody => "Your connection has been restored.",
        OfflineBanner => "You are currently offline. New entries stay in this session only.",
    }
}

fn sinhala(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;
    Some(match key {
        ReportSubmittedTitle => "වාර්තාව ඉදිරිපත් කළා",
        ReportDeletedTitle => "වාර්තාව මකා දැමුණි",
        VolunteerRegisteredTitle => "ලියාපදිංචිය සාර්ථකයි",
        SupportAddedTitle => "සහාය ඇතුළත් කිරීම එක් කළා",
        EntryDeletedTitle => "ඇතුළත් කිරීම මකා දැමුණි",
        OfflineTitle => "ඔබ නොබැඳි තත්ත්වයේ සිටී",
        OnlineTitle => "නැවත සබැඳි විය",
        _ => return None,
    })
}

fn tamil(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;
    Some(match key {
        ReportSubmittedTitle => "அறிக்கை சமர்ப்பிக்கப்பட்டது",
        ReportDeletedTitle => "அறிக்கை நீக்கப்பட்டது",
        VolunteerRegisteredTitle => "பதிவு வெற்றிகரமாக முடிந்தது",
        SupportAddedTitle => "உதவி பதிவு சேர்க்கப்பட்டது",
        EntryDeletedTitle => "பதிவு நீக்கப்பட்டது",
        OfflineTitle => "நீங்கள் இணைப்பில் இல்லை",
        OnlineTitle => "மீண்டும் இணைப்பில் உள்ளீர்கள்",
        _ => return None,
    })
}

/// Resolve `key` for `locale`, falling back to English.
pub fn translate(locale: Locale, key: MessageKey) -> &'static str {
    let translated = match locale {
        Locale::En => None,
        Locale::Si => sinhala(key),
        Locale::Ta => tamil(key),
    };
    translated.unwrap_or_else(|| english(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lookup() {
        assert_eq!(
            translate(Locale::En, MessageKey::ReportSubmittedTitle),
            "Report Submitted"
        );
    }

    #[test]
    fn test_translated_title() {
        assert_eq!(
            translate(Locale::Ta, MessageKey::OfflineTitle),
            "நீங்கள் இணைப்பில் இல்லை"
        );
    }

    #[test]
    fn test_missing_translation_falls_back_to_english() {
        assert_eq!(
            translate(Locale::Si, MessageKey::OnlineBody),
            translate(Locale::En, MessageKey::OnlineBody)
        );
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!("SI".parse::<Locale>().unwrap(), Locale::Si);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
    }
}
