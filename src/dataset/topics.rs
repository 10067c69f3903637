//! Multi-level educational topics.

use super::authored;
use crate::domain::{
    Citation, CitationKind, ClinicalRelevance, ContentKind, ContentTags, EducationalContent,
    ExplanationLevel, LevelContent, Relationship,
};

fn citation(id: &str, kind: CitationKind, title: &str, source: &str, url: &str) -> Citation {
    Citation {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        source: source.to_string(),
        url: url.to_string(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tags(
    systems: &[&str],
    topics: &[&str],
    keywords: &[&str],
    relevance: ClinicalRelevance,
) -> ContentTags {
    ContentTags {
        systems: owned(systems),
        topics: owned(topics),
        keywords: owned(keywords),
        clinical_relevance: relevance,
    }
}

/// Every authored topic, in display order
pub fn topics() -> Vec<EducationalContent> {
    vec![patient_rights(), insurance_basics()]
}

fn patient_rights() -> EducationalContent {
    EducationalContent::new(
        "topic-patient-rights-simple",
        ContentKind::Topic,
        "Patient Rights",
        "Derechos del Paciente",
    )
    .with_alternate_names([
        "Patient Bill of Rights",
        "Your Rights as a Patient",
        "Healthcare Rights",
    ])
    .with_level(
        LevelContent::new(
            ExplanationLevel::Child,
            "When you go to the doctor, you have rights. Rights are rules that keep you safe and make sure people treat you kindly.",
            "The doctor must tell you what they want to do and why. You can ask questions. Your body belongs to you, so the grown-ups who take care of you get to say yes or no. Your health secrets stay private, like a diary with a lock.",
        )
        .with_key_term("Right", "A rule that protects you that no one can take away")
        .with_key_term("Private", "Something only you and people you choose get to know")
        .with_analogy("Your health information is like a diary with a lock; only people you give the key to can read it."),
    )
    .with_level(
        LevelContent::new(
            ExplanationLevel::Patient,
            "Patient rights are legal protections for privacy, informed consent, fair treatment, emergency care and language services.",
            "You have the right to understand your care and agree to it before it starts, to keep your health information private, to see your records, to get a free interpreter, and to receive emergency care whether or not you can pay. You can refuse treatment, ask for a second opinion, and file a complaint without fear of retaliation.",
        )
        .with_key_term("Informed consent", "Agreeing to care after it has been explained to you, including risks and alternatives")
        .with_key_term("HIPAA", "The federal law that protects the privacy of your health information")
        .with_key_term("EMTALA", "The federal law that guarantees emergency screening and stabilization")
        .with_example("Asking for a Spanish-speaking interpreter before signing a surgery consent form")
        .with_counseling_point("You never need to apologize for asking questions or requesting an interpreter"),
    )
    .with_level(
        LevelContent::new(
            ExplanationLevel::Nursing,
            "Patient rights are codified in federal law (HIPAA, EMTALA, ADA, Title VI, Section 1557) and state regulations, and nurses are often the first to put them into practice.",
            "Nursing responsibilities include verifying that consent was informed and documented before procedures, arranging qualified interpreters for patients with limited English proficiency, protecting health information in conversations and charting, and escalating concerns through the chain of command or the patient advocate.",
        )
        .with_key_term("Limited English proficiency", "Limited ability to read, speak, write or understand English, triggering language-access obligations")
        .with_key_term("Section 1557", "The ACA non-discrimination provision covering federally funded health programs")
        .with_clinical_notes("Document interpreter use, including interpreter ID and modality, in every consent discussion.")
        .with_counseling_point("Teach-back confirms the patient understood the plan"),
    )
    .with_level(
        LevelContent::new(
            ExplanationLevel::MedicalStudent,
            "Patient rights derive from a layered framework of federal statutes, regulations and case law that shape consent, confidentiality, access and non-discrimination.",
            "Consent doctrine evolved from battery (Schloendorff, 1914) to the reasonable-patient disclosure standard (Canterbury v. Spence, 1972). HIPAA's Privacy Rule defines permissible uses and disclosures; the 21st Century Cures Act adds information-blocking prohibitions. EMTALA obligations attach at hospital property and persist until stabilization.",
        )
        .with_key_term("Reasonable-patient standard", "Disclosure of what a reasonable patient would want to know to decide")
        .with_key_term("Information blocking", "Practices that unreasonably interfere with access to electronic health information")
        .with_clinical_notes("Capacity is decision-specific and assessed by the treating clinician; it is distinct from legal competence."),
    )
    .with_level(
        LevelContent::new(
            ExplanationLevel::Physician,
            "Patient rights sit at the intersection of jurisprudence, regulation, clinical ethics and health equity, with new frontiers in digital health and AI-assisted care.",
            "Expert practice requires integrating evolving consent jurisprudence, HIPAA enforcement trends, EMTALA obligations in changing legal landscapes, disability-rights enforcement for accessible equipment, and emerging expectations for transparency when algorithms inform clinical decisions.",
        )
        .with_key_term("Shared decision-making", "A collaborative process integrating evidence with patient values and preferences")
        .with_key_term("Algorithmic transparency", "Disclosure of how automated tools contribute to clinical recommendations")
        .with_clinical_notes("Institutional policy should exceed minimum legal requirements, particularly for language access as a patient-safety intervention."),
    )
    .with_citation(citation(
        "hhs-patient-rights",
        CitationKind::Government,
        "Your Rights Under HIPAA",
        "U.S. Department of Health and Human Services",
        "https://www.hhs.gov/hipaa/for-individuals/guidance-materials-for-consumers/index.html",
    ))
    .with_citation(citation(
        "cms-emtala",
        CitationKind::Government,
        "Emergency Medical Treatment & Labor Act (EMTALA)",
        "Centers for Medicare & Medicaid Services",
        "https://www.cms.gov/medicare/regulations-guidance/legislation/emergency-medical-treatment-labor-act",
    ))
    .with_cross_reference("topic-insurance-basics", Relationship::Related, "Health Insurance Basics")
    .with_cross_reference("informed-consent", Relationship::SeeAlso, "Right to Informed Consent")
    .with_tags(tags(
        &["healthcare-navigation"],
        &["patient rights", "HIPAA", "informed consent", "EMTALA"],
        &["privacy", "medical records", "interpreter", "emergency care", "complaint"],
        ClinicalRelevance::Critical,
    ))
    .with_timestamps(authored(2025, 3, 10), authored(2025, 9, 2))
}

fn insurance_basics() -> EducationalContent {
    EducationalContent::new(
        "topic-insurance-basics",
        ContentKind::Topic,
        "Health Insurance Basics",
        "Conceptos Básicos del Seguro Médico",
    )
    .with_alternate_names(["Understanding Health Insurance", "Insurance 101"])
    .with_level(
        LevelContent::new(
            ExplanationLevel::Child,
            "Health insurance is a way families share the cost of going to the doctor.",
            "Lots of families put a little money into a big piggy bank every month. When someone gets sick, the piggy bank helps pay the doctor, so no one family has to pay for everything alone.",
        )
        .with_key_term("Insurance", "A plan where many people share the cost of care")
        .with_analogy("Insurance is like a big shared piggy bank for doctor visits."),
    )
    .with_level(
        LevelContent::new(
            ExplanationLevel::Patient,
            "Health insurance helps pay for medical care in exchange for a monthly premium; you still share some costs through deductibles, copays and coinsurance.",
            "The premium is what you pay each month to keep coverage. The deductible is what you pay before the plan starts paying for most services. A copay is a fixed amount per visit, and coinsurance is a percentage of the cost. The out-of-pocket maximum caps what you pay in a year.",
        )
        .with_key_term("Premium", "The monthly price of the insurance plan")
        .with_key_term("Deductible", "What you pay each year before the plan pays for most care")
        .with_key_term("Copay", "A fixed amount you pay for a visit or prescription")
        .with_key_term("Out-of-pocket maximum", "The most you will pay for covered care in one year")
        .with_counseling_point("Preventive visits are often covered with no copay, even before the deductible"),
    )
    .with_level(
        LevelContent::new(
            ExplanationLevel::Nursing,
            "Coverage type, network status and prior authorization rules shape discharge planning, medication access and follow-up care.",
            "Nurses and case managers verify coverage for durable medical equipment, home health and post-acute placement, and flag formulary restrictions early. Medicaid, Medicare, marketplace and employer plans differ in networks and authorization requirements.",
        )
        .with_key_term("Prior authorization", "Plan approval required before a service or drug is covered")
        .with_key_term("Formulary", "The list of drugs a plan covers and their cost tiers")
        .with_clinical_notes("Start prior authorization requests for discharge medications before the discharge day."),
    )
    .with_level(
        LevelContent::new(
            ExplanationLevel::MedicalStudent,
            "US coverage is a patchwork of public programs (Medicare, Medicaid, CHIP) and private employer or marketplace plans, each with distinct eligibility, financing and benefit rules.",
            "Medicare Parts A-D cover hospital, outpatient, managed care and drugs respectively. Medicaid is jointly financed and state-administered, with ACA expansion to 138% of the federal poverty level in participating states. Marketplace plans carry essential health benefits and income-based premium tax credits.",
        )
        .with_key_term("Essential health benefits", "Ten categories of services ACA-compliant plans must cover")
        .with_key_term("Dual eligible", "A patient enrolled in both Medicare and Medicaid")
        .with_clinical_notes("Coverage gaps are a social determinant of health; screen for them at every transition of care."),
    )
    .with_level(
        LevelContent::new(
            ExplanationLevel::Physician,
            "Payer policy drives practice patterns through reimbursement, quality programs and utilization management, and coverage churn measurably worsens outcomes.",
            "Value-based payment models, Medicare Advantage growth and Medicaid redeterminations reshape access and continuity. Physicians increasingly engage with utilization management, peer-to-peer reviews and advocacy against administrative burden that delays necessary care.",
        )
        .with_key_term("Utilization management", "Payer processes such as prior authorization that review the necessity of care")
        .with_key_term("Coverage churn", "Repeated loss and regain of insurance coverage")
        .with_clinical_notes("Peer-to-peer reviews succeed more often when guideline citations accompany the request."),
    )
    .with_citation(citation(
        "healthcare-gov-glossary",
        CitationKind::Government,
        "Health Insurance Glossary",
        "HealthCare.gov",
        "https://www.healthcare.gov/glossary/",
    ))
    .with_citation(citation(
        "kff-basics",
        CitationKind::Website,
        "Health Insurance Coverage of the Total Population",
        "KFF",
        "https://www.kff.org/other/state-indicator/total-population/",
    ))
    .with_cross_reference("topic-patient-rights-simple", Relationship::Related, "Patient Rights")
    .with_cross_reference("insurance-denial-appeals", Relationship::SeeAlso, "Appealing an Insurance Denial")
    .with_tags(tags(
        &["healthcare-navigation"],
        &["health insurance", "Medicaid", "Medicare", "marketplace"],
        &["premium", "deductible", "copay", "coinsurance", "prior authorization"],
        ClinicalRelevance::High,
    ))
    .with_timestamps(authored(2025, 4, 21), authored(2025, 8, 14))
}
