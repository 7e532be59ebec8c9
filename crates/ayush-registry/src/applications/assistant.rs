//! Keyword FAQ assistant answering common registration questions.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

const GREETING_PREFIXES: &[&str] = &["hi", "hello", "hey", "greetings"];
const FAREWELL_PREFIXES: &[&str] = &["bye", "goodbye", "see you", "take care"];
const THANKS_PREFIXES: &[&str] = &["thanks", "thank you", "appreciate"];

const GREETING_REPLY: &str = "Hello! How can I assist you with your AYUSH startup today?";
const FAREWELL_REPLY: &str =
    "Goodbye! Feel free to return if you have more questions about your AYUSH startup journey.";
const THANKS_REPLY: &str = "You're welcome! Is there anything else I can help you with?";

pub const FALLBACK_REPLIES: [&str; 4] = [
    "I'm not sure I understand your question. Could you rephrase it or ask about registration, \
     benefits, technical support, or regulations?",
    "I don't have specific information on that. Would you like to know about the AYUSH \
     registration process or available benefits instead?",
    "I'm specialized in AYUSH startup information. Try asking about application requirements, \
     funding opportunities, or compliance regulations.",
    "Let me redirect you. You can ask about 'What documents are required?', 'How long does \
     registration take?', or 'What benefits do I get?'",
];

/// Bonus for a question identical to a FAQ question.
const EXACT_QUESTION_BONUS: usize = 100;
/// An entry must beat this many keyword hits to be used as the answer.
const MIN_MATCH_SCORE: usize = 1;
/// Keywords must be longer than this many UTF-16 units.
const MIN_KEYWORD_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        category: "Registration Process",
        question: "What is the AYUSH Startup Registration Portal?",
        answer: "The AYUSH Startup Registration Portal is a dedicated platform for startups in the \
                     Ayurveda, Yoga & Naturopathy, Unani, Siddha, and Homeopathy sectors to register \
                     their businesses with the Ministry of AYUSH. The portal streamlines the registration \
                     process and provides resources for compliance with AYUSH regulations.",
    },
    FaqEntry {
        category: "Registration Process",
        question: "Who can register on the AYUSH Startup Portal?",
        answer: "Any startup operating in the AYUSH sector (Ayurveda, Yoga & Naturopathy, Unani, \
                     Siddha, and Homeopathy) can register on the portal. The startup should be \
                     incorporated as a legal entity in India and should be focused on products, services, \
                     or technologies related to traditional medicine systems.",
    },
    FaqEntry {
        category: "Registration Process",
        question: "What documents are required for registration?",
        answer: "Required documents include: Certificate of Incorporation, Business Plan, PAN Card, \
                     GST Registration (if applicable), AYUSH-related certifications (if any), \
                     Product/Service documentation, and Proof of address. Additional documents may be \
                     required based on your specific business category.",
    },
    FaqEntry {
        category: "Registration Process",
        question: "How long does the registration process take?",
        answer: "The initial review typically takes 15-30 business days from the date of submission \
                     of a complete application. If additional information is requested, the timeline may \
                     be extended.",
    },
    FaqEntry {
        category: "Benefits & Support",
        question: "What benefits do I get after registering my AYUSH startup?",
        answer: "Registered AYUSH startups can access various benefits including: Funding \
                     opportunities through government schemes, Regulatory support and guidance, \
                     Networking with industry experts and mentors, Access to incubation facilities, \
                     Participation in national and international exhibitions, Marketing support, and \
                     Simplified compliance processes.",
    },
    FaqEntry {
        category: "Benefits & Support",
        question: "Are there any funding opportunities available?",
        answer: "Yes, registered AYUSH startups can access various funding opportunities including \
                     grants from the Ministry of AYUSH, BIRAC funding for biotechnology startups, Startup \
                     India Seed Fund, and venture capital funding through government-backed funds focused \
                     on traditional medicine and wellness.",
    },
    FaqEntry {
        category: "Benefits & Support",
        question: "How does the AI scoring system evaluate my application?",
        answer: "Our AI scoring system evaluates applications based on multiple factors: Innovation \
                     (25%), Market Viability (25%), Compliance with AYUSH standards (25%), Team Strength \
                     (15%), and Relevance to AYUSH sectors (10%). The system analyzes your application \
                     text, business plan, and other documents to generate a comprehensive score. \
                     Applications scoring 45 or above are approved.",
    },
    FaqEntry {
        category: "Technical Support",
        question: "I'm having trouble uploading documents. What should I do?",
        answer: "Please ensure that your documents are in PDF, JPG, or PNG format and do not exceed \
                     5MB in size. If you're still experiencing issues, try using a different browser or \
                     clearing your browser cache. For persistent problems, contact our technical support \
                     team.",
    },
    FaqEntry {
        category: "Technical Support",
        question: "How can I check the status of my application?",
        answer: "You can check your application status by logging into your account and visiting the \
                     Dashboard section. The status will show as Draft, Submitted, Under Review, Approved, \
                     or Rejected. You will also receive email notifications when there are changes to \
                     your application status.",
    },
    FaqEntry {
        category: "Technical Support",
        question: "Can I edit my application after submission?",
        answer: "You can edit your application if it is in 'Draft' status. Once submitted, you cannot \
                     make direct changes to the application, but you can contact the support team if you \
                     need to update critical information. If your application is rejected, you can submit \
                     a new application with corrected information.",
    },
    FaqEntry {
        category: "Regulations & Compliance",
        question: "What regulations govern AYUSH startups?",
        answer: "AYUSH startups are governed by several regulations depending on their specific area \
                     of operation, including: The Drugs and Cosmetics Act, 1940 and Rules 1945, AYUSH \
                     Safety Monitoring Program (ASM), Good Manufacturing Practices (GMP) for AYUSH \
                     products, Advertising Standards, and Import/Export regulations for AYUSH products.",
    },
    FaqEntry {
        category: "Regulations & Compliance",
        question: "Do I need specific certifications for my AYUSH products?",
        answer: "Yes, depending on your product category, you may need certifications such as AYUSH \
                     Premium Mark, Good Manufacturing Practices (GMP) certification, ISO certification, \
                     FSSAI certification (for food supplements), Organic certification (if applicable), \
                     and Quality testing certification from recognized laboratories.",
    },
];

/// Reply chosen by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssistantReply {
    Greeting,
    Farewell,
    Thanks,
    Faq {
        entry: &'static FaqEntry,
        score: usize,
    },
    Fallback {
        index: usize,
    },
}

impl AssistantReply {
    pub const fn kind(&self) -> &'static str {
        match self {
            AssistantReply::Greeting => "greeting",
            AssistantReply::Farewell => "farewell",
            AssistantReply::Thanks => "thanks",
            AssistantReply::Faq { .. } => "faq",
            AssistantReply::Fallback { .. } => "fallback",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            AssistantReply::Greeting => GREETING_REPLY,
            AssistantReply::Farewell => FAREWELL_REPLY,
            AssistantReply::Thanks => THANKS_REPLY,
            AssistantReply::Faq { entry, .. } => entry.answer,
            AssistantReply::Fallback { index } => FALLBACK_REPLIES[index % FALLBACK_REPLIES.len()],
        }
    }
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    entry: &'static FaqEntry,
    question: String,
    keywords: BTreeSet<String>,
}

impl IndexedEntry {
    fn new(entry: &'static FaqEntry) -> Self {
        let question = entry.question.to_lowercase();
        let answer = entry.answer.to_lowercase();
        let keywords = question
            .split(' ')
            .chain(answer.split(' '))
            .filter(|word| word.encode_utf16().count() > MIN_KEYWORD_LEN)
            .map(str::to_string)
            .collect();

        Self {
            entry,
            question,
            keywords,
        }
    }

    fn score(&self, asked: &str) -> usize {
        let hits = self
            .keywords
            .iter()
            .filter(|keyword| asked.contains(keyword.as_str()))
            .count();
        if self.question == asked {
            hits + EXACT_QUESTION_BONUS
        } else {
            hits
        }
    }
}

/// Answers free-text questions from the FAQ table by keyword overlap.
#[derive(Debug, Clone)]
pub struct FaqAssistant {
    entries: Vec<IndexedEntry>,
}

impl Default for FaqAssistant {
    fn default() -> Self {
        Self::new(FAQ)
    }
}

impl FaqAssistant {
    pub fn new(faq: &'static [FaqEntry]) -> Self {
        Self {
            entries: faq.iter().map(IndexedEntry::new).collect(),
        }
    }

    /// Pick a reply for `question`. `fallback_index` selects the fallback reply (modulo the table
    /// length) when nothing matches.
    pub fn reply(&self, question: &str, fallback_index: usize) -> AssistantReply {
        let asked = question.to_lowercase();

        if starts_with_any(&asked, GREETING_PREFIXES) {
            return AssistantReply::Greeting;
        }
        if starts_with_any(&asked, FAREWELL_PREFIXES) {
            return AssistantReply::Farewell;
        }
        if starts_with_any(&asked, THANKS_PREFIXES) {
            return AssistantReply::Thanks;
        }

        let mut best: Option<(&IndexedEntry, usize)> = None;
        for indexed in &self.entries {
            let score = indexed.score(&asked);
            if score > best.map(|(_, top)| top).unwrap_or(0) {
                best = Some((indexed, score));
            }
        }

        match best {
            Some((indexed, score)) if score > MIN_MATCH_SCORE => {
                debug!(category = indexed.entry.category, score, "faq match");
                AssistantReply::Faq {
                    entry: indexed.entry,
                    score,
                }
            }
            _ => AssistantReply::Fallback {
                index: fallback_index % FALLBACK_REPLIES.len(),
            },
        }
    }
}

fn starts_with_any(text: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| text.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_for(question: &str) -> &'static str {
        FAQ.iter()
            .find(|entry| entry.question == question)
            .map(|entry| entry.answer)
            .expect("faq entry exists")
    }

    #[test]
    fn faq_table_has_twelve_entries_in_four_categories() {
        assert_eq!(FAQ.len(), 12);
        let categories: BTreeSet<_> = FAQ.iter().map(|entry| entry.category).collect();
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn small_talk_matches_on_prefix() {
        let assistant = FaqAssistant::default();
        assert_eq!(assistant.reply("Hello there", 0), AssistantReply::Greeting);
        assert_eq!(
            assistant.reply("Hey, what documents do I need?", 0),
            AssistantReply::Greeting
        );
        assert_eq!(assistant.reply("history of ayurveda", 0), AssistantReply::Greeting);
        assert_eq!(assistant.reply("See you tomorrow", 0), AssistantReply::Farewell);
        assert_eq!(assistant.reply("GOODBYE", 0), AssistantReply::Farewell);
        assert_eq!(assistant.reply("thank you so much", 0), AssistantReply::Thanks);
        assert_eq!(AssistantReply::Thanks.text(), THANKS_REPLY);
    }

    #[test]
    fn exact_question_gets_priority_bonus() {
        let assistant = FaqAssistant::default();
        let question = "What documents are required for registration?";

        match assistant.reply(question, 0) {
            AssistantReply::Faq { entry, score } => {
                assert_eq!(entry.question, question);
                assert_eq!(score, 105);
            }
            other => panic!("expected faq match, got {other:?}"),
        }
    }

    #[test]
    fn keyword_overlap_selects_best_entry() {
        let assistant = FaqAssistant::default();
        let reply = assistant.reply("how can i check my application status", 0);

        assert_eq!(reply.kind(), "faq");
        assert_eq!(
            reply.text(),
            answer_for("How can I check the status of my application?")
        );
    }

    #[test]
    fn ties_keep_the_earlier_entry() {
        let assistant = FaqAssistant::default();

        match assistant.reply("funding opportunities", 0) {
            AssistantReply::Faq { entry, score } => {
                assert_eq!(score, 2);
                assert_eq!(
                    entry.question,
                    "What benefits do I get after registering my AYUSH startup?"
                );
            }
            other => panic!("expected faq match, got {other:?}"),
        }
    }

    #[test]
    fn single_keyword_hit_falls_back() {
        let assistant = FaqAssistant::default();
        assert_eq!(
            assistant.reply("portal", 1),
            AssistantReply::Fallback { index: 1 }
        );
    }

    #[test]
    fn fallback_reply_follows_injected_index() {
        let assistant = FaqAssistant::default();

        let reply = assistant.reply("xyz", 6);
        assert_eq!(reply, AssistantReply::Fallback { index: 2 });
        assert_eq!(reply.text(), FALLBACK_REPLIES[2]);
        assert_eq!(assistant.reply("xyz", 6), reply);
    }

    #[test]
    fn reply_serializes_with_kind_tag() {
        let reply = FaqAssistant::default().reply("Is there any funding?", 0);
        let json = serde_json::to_value(reply).expect("serializes");

        assert_eq!(json["kind"], "faq");
        assert_eq!(json["entry"]["category"], "Benefits & Support");
        assert_eq!(json["score"], 2);
    }
}
