//! Localized mock generator: the terminal fallback of the analysis pipeline.
//!
//! Fixed content, identical on every call for the same language. Depends on
//! neither the classifier nor the generative client.

use serde_json::Map;

use crate::models::{CanonicalResponse, Language, StudyPlanItem};

struct Localized {
    english: &'static str,
    hindi: &'static str,
    gujarati: &'static str,
}

impl Localized {
    fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Hindi => self.hindi,
            Language::Gujarati => self.gujarati,
        }
    }
}

struct MockStep {
    day: &'static str,
    topic: &'static str,
    /// Search query stem; the language name is appended.
    query: &'static str,
    description: Localized,
}

const SUMMARY: Localized = Localized {
    english: "You are an emerging developer showing interest in Web Development. You have some foundational skills, but you need to achieve mastery in a few more areas to become a Full Stack Developer.",
    hindi: "आप एक उभरते हुए डेवलपर हैं जिनके पास वेब डेवलपमेंट में रुचि दिख रही है। आपके पास कुछ बुनियादी कौशल हैं, लेकिन फुल स्टैक डेवलपर बनने के लिए आपको कुछ और क्षेत्रों में महारत हासिल करनी होगी।",
    gujarati: "તમે વેબ ડેવલપમેન્ટમાં રસ ધરાવતા ઉભરતા ડેવલપર છો. તમારી પાસે કેટલીક પાયાની કુશળતા છે, પરંતુ ફુલ સ્ટેક ડેવલપર બનવા માટે તમારે હજી થોડા વધુ ક્ષેત્રોમાં નિપુણતા પ્રાપ્ત કરવી પડશે.",
};

const MISSING_SKILLS: &[&str] = &[
    "Advanced JavaScript Frameworks (e.g., React, Angular, Vue.js)",
    "Backend Development (e.g., Node.js with Express, Python with Django/Flask)",
    "Database Management (SQL/NoSQL)",
    "API Development & Integration (RESTful APIs)",
    "Version Control (Git & GitHub)",
    "Deployment & Hosting (e.g., Netlify, Heroku, AWS)",
];

const STEPS: &[MockStep] = &[
    MockStep {
        day: "Day 1-2",
        topic: "Introduction to React.js",
        query: "React js tutorial for beginners",
        description: Localized {
            english: "This will help you understand the basics of React.js, one of the most popular frameworks for modern front-end development.",
            hindi: "यह आपको आधुनिक फ्रंट-एंड डेवलपमेंट के लिए सबसे लोकप्रिय फ्रेमवर्क में से एक, React.js की मूल बातें समझने में मदद करेगा।",
            gujarati: "આ તમને આધુનિક ફ્રન્ટ-એન્ડ ડેવલપમેન્ટ માટે સૌથી લોકપ્રિય ફ્રેમવર્કમાંથી એક, React.js ની મૂળભૂત બાબતોને સમજવામાં મદદ કરશે.",
        },
    },
    MockStep {
        day: "Day 3-4",
        topic: "Backend Development with Node.js & Express",
        query: "Node js express tutorial",
        description: Localized {
            english: "This will introduce you to server-side programming and how to build backends for web applications.",
            hindi: "यह आपको सर्वर-साइड प्रोग्रामिंग और वेब एप्लिकेशन के लिए बैकएंड बनाने के तरीके से परिचित कराएगा।",
            gujarati: "આ તમને સર્વર-સાઇડ પ્રોગ્રામિંગ અને વેબ એપ્લિકેશન માટે બેકએન્ડ બનાવવાની રીતથી પરિચિત કરાવશે.",
        },
    },
    MockStep {
        day: "Day 5-7",
        topic: "Database Management (SQL & NoSQL basics)",
        query: "SQL vs NoSQL tutorial",
        description: Localized {
            english: "Understanding databases to store and manage data is crucial for a Full Stack Developer.",
            hindi: "डेटा को स्टोर करने और प्रबंधित करने के लिए डेटाबेस की समझ एक फुल स्टैक डेवलपर के लिए महत्वपूर्ण है।",
            gujarati: "ડેટાને સ્ટોર કરવા અને મેનેજ કરવા માટે ડેટાબેઝની સમજ એક ફુલ સ્ટેક ડેવલપર માટે મહત્વપૂર્ણ છે.",
        },
    },
    MockStep {
        day: "Day 8-10",
        topic: "RESTful API Development",
        query: "RESTful API tutorial",
        description: Localized {
            english: "This will teach you how to create and use APIs for communication between front-end and back-end.",
            hindi: "यह आपको फ्रंट-एंड और बैक-एंड के बीच संचार के लिए API बनाने और उनका उपयोग करने का तरीका सिखाएगा।",
            gujarati: "આ તમને ફ્રન્ટ-એન્ડ અને બેક-એન્ડ વચ્ચે સંચાર માટે API બનાવવા અને તેનો ઉપયોગ કરવાની રીત શીખવશે.",
        },
    },
    MockStep {
        day: "Day 11-12",
        topic: "Version Control with Git & GitHub",
        query: "Git and GitHub tutorial",
        description: Localized {
            english: "This will help you manage code effectively, collaborate, and track changes, which is essential for every developer.",
            hindi: "यह आपको कोड को प्रभावी ढंग से प्रबंधित करने, सहयोग करने और परिवर्तनों को ट्रैक करने में मदद करेगा, जो हर डेवलपर के लिए आवश्यक है।",
            gujarati: "આ તમને કોડને અસરકારક રીતે મેનેજ કરવા, સહયોગ કરવા અને ફેરફારોને ટ્રેક કરવામાં મદદ કરશે, જે દરેક ડેવલપર માટે જરૂરી છે.",
        },
    },
    MockStep {
        day: "Day 13-14",
        topic: "Basic Deployment & Hosting",
        query: "Web deployment tutorial",
        description: Localized {
            english: "Learn to deploy your projects to a live server to share them with the world.",
            hindi: "अपने प्रोजेक्ट्स को दुनिया के साथ साझा करने के लिए उन्हें लाइव सर्वर पर डिप्लॉय करना सीखें।",
            gujarati: "તમારા પ્રોજેક્ટ્સને દુનિયા સાથે શેર કરવા માટે તેમને લાઈવ સર્વર પર ડિપ્લોય કરતા શીખો.",
        },
    },
];

/// Builds the canned response for `language`.
pub fn mock_response(language: Language) -> CanonicalResponse {
    CanonicalResponse {
        candidate_summary: SUMMARY.get(language).to_string(),
        missing_skills: MISSING_SKILLS.iter().map(|s| s.to_string()).collect(),
        study_plan: STEPS
            .iter()
            .map(|step| {
                StudyPlanItem::new(
                    step.day,
                    step.topic,
                    format!("{} {}", step.query, language.label()),
                    step.description.get(language),
                )
            })
            .collect(),
        student_name: None,
        current_level: None,
        extra: Map::new(),
    }
}

/// Convenience for callers that only hold the caller's raw language label.
pub fn mock_response_for(label: &str) -> CanonicalResponse {
    mock_response(Language::from_label(label))
}
