//! The fixed question/answer corpus.
//!
//! The corpus is an ordered, immutable table built once at startup.
//! Order matters: when two entries tie on similarity, the earlier
//! entry wins, and the keyword fallback accumulates answers in corpus
//! order.

/// A single canonical question and its canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// Canonical question key, lowercase by convention
    pub question: String,

    /// The answer returned verbatim on an exact match
    pub answer: String,
}

impl CorpusEntry {
    /// Create a new entry.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An ordered sequence of corpus entries, read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Build a corpus from entries, preserving order.
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    /// Iterate entries in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter()
    }

    /// Iterate the question keys in corpus order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    /// The built-in health question/answer table.
    pub fn health() -> Self {
        let entries = [
            (
                "hello",
                "Hello! How can I assist you with your health today?",
            ),
            (
                "physical",
                "Physical development involves activities that improve your body's health and fitness. Examples include exercise, proper nutrition, and adequate sleep.",
            ),
            (
                "mental",
                "Mental development involves cognitive exercises that enhance your intellectual capabilities. Reading, puzzles, and learning new skills are good practices.",
            ),
            (
                "emotional",
                "Emotional development focuses on understanding and managing your emotions. Practices include mindfulness, therapy, and healthy relationships.",
            ),
            (
                "spiritual",
                "Spiritual development is about finding purpose and meaning in life. This can be through religion, meditation, or personal reflection.",
            ),
            (
                "social",
                "Social development involves improving your interpersonal skills. Activities include socializing, teamwork, and community involvement.",
            ),
            (
                "exercise benefits",
                "Regular exercise helps improve cardiovascular health, strengthens muscles, boosts mental health, and enhances overall well-being.",
            ),
            (
                "nutrition importance",
                "Proper nutrition is essential for maintaining good health, providing energy, and supporting bodily functions.",
            ),
            (
                "sleep benefits",
                "Adequate sleep is crucial for physical and mental health, aiding in recovery, memory consolidation, and mood regulation.",
            ),
            (
                "hydration",
                "Staying hydrated is essential for maintaining bodily functions, regulating temperature, and supporting digestion. Aim to drink at least 8 glasses of water a day.",
            ),
            (
                "stress management",
                "Stress management techniques include mindfulness, meditation, deep breathing exercises, and engaging in hobbies or physical activities.",
            ),
            (
                "mental health tips",
                "Some tips for maintaining good mental health include regular physical activity, a balanced diet, adequate sleep, socializing with friends and family, and seeking professional help when needed.",
            ),
            (
                "chronic diseases",
                "Chronic diseases such as diabetes, hypertension, and heart disease can often be managed through a combination of medication, lifestyle changes, and regular medical check-ups.",
            ),
            (
                "healthy eating",
                "Healthy eating involves consuming a variety of foods, including fruits, vegetables, whole grains, lean proteins, and dairy, while limiting sugars, salt, and unhealthy fats.",
            ),
            (
                "immunization",
                "Immunization is a vital part of preventive healthcare. Vaccines protect against various infectious diseases, reducing their spread and severity.",
            ),
            (
                "mental wellness",
                "Mental wellness involves maintaining emotional, psychological, and social well-being. It includes managing stress, building resilience, and seeking support when needed.",
            ),
            (
                "screening tests",
                "Regular screening tests can help detect diseases early. Common tests include blood pressure, cholesterol levels, mammograms, and colonoscopies, depending on age and risk factors.",
            ),
            (
                "smoking cessation",
                "Quitting smoking can significantly reduce the risk of heart disease, cancer, and respiratory illnesses. Consider seeking support from healthcare providers, support groups, or smoking cessation programs.",
            ),
            (
                "physical activity",
                "Engaging in at least 150 minutes of moderate-intensity aerobic activity or 75 minutes of vigorous-intensity activity per week is recommended for adults.",
            ),
            (
                "hydration importance",
                "Staying hydrated is vital for maintaining bodily functions, including temperature regulation, joint lubrication, and nutrient transportation.",
            ),
            (
                "benefits of yoga",
                "Yoga improves flexibility, muscle strength, and mental clarity. It also helps with stress management and overall well-being.",
            ),
            (
                "importance of regular check-ups",
                "Regular check-ups can help detect health issues early, monitor existing conditions, and maintain overall health.",
            ),
            (
                "healthy diet",
                "A healthy diet includes a variety of fruits, vegetables, whole grains, and lean proteins. It's important to limit processed foods and sugars.",
            ),
            (
                "heart health tips",
                "To maintain heart health, engage in regular physical activity, eat a balanced diet, avoid smoking, and manage stress effectively.",
            ),
            (
                "immune system boosting",
                "Boost your immune system with a balanced diet, regular exercise, adequate sleep, and proper hygiene practices.",
            ),
            (
                "fitness routines",
                "Consistency is key. Create a balanced routine that includes cardiovascular exercise, strength training, and flexibility exercises.",
            ),
            (
                "mindfulness",
                "Mindfulness involves paying full attention to what\u{2019}s happening in the present moment. Techniques include meditation, deep breathing, and mindful movement like yoga.",
            ),
            (
                "healthy relationships",
                "Healthy relationships are built on trust, respect, and communication. It\u{2019}s important to listen actively, express yourself clearly, and support each other.",
            ),
            (
                "anxiety management",
                "To manage anxiety, practice relaxation techniques, stay physically active, maintain a healthy lifestyle, and seek professional help if necessary.",
            ),
            (
                "depression support",
                "If you or someone you know is struggling with depression, it's important to seek professional help. Talking to a therapist and reaching out to supportive friends and family can also make a big difference.",
            ),
            (
                "mental health resources",
                "There are many resources available for mental health support, including therapists, support groups, hotlines, and online communities.",
            ),
        ];

        Self::new(
            entries
                .into_iter()
                .map(|(q, a)| CorpusEntry::new(q, a))
                .collect(),
        )
    }
}
