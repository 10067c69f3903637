//! Patient-advocacy entries.

use crate::domain::{Category, ContentEntry};

fn entry(
    id: &str,
    category: Category,
    name: &str,
    name_es: &str,
    description: &str,
) -> ContentEntry {
    ContentEntry::new(id, category, name, description).with_name_es(name_es)
}

/// Every authored advocacy entry, in display order
pub fn advocacy_entries() -> Vec<ContentEntry> {
    vec![
        // =====================================================================
        // RIGHTS
        // =====================================================================
        entry(
            "informed-consent",
            Category::Rights,
            "Right to Informed Consent",
            "Derecho al Consentimiento Informado",
            "Before any test, procedure or treatment, your care team must explain what they plan to do, the risks, the benefits and your other options, and then ask for your permission.",
        )
        .with_explanation(
            "Consent is a conversation, not a signature. You may ask questions until you understand, take time to decide, bring someone with you, and refuse or withdraw consent at any point. For most non-emergency care a clinician cannot proceed without your agreement.",
        )
        .with_key_points([
            "You can say no to any treatment, even one your doctor recommends",
            "Ask for the explanation in your preferred language",
            "Signing a form does not take away your right to change your mind",
            "In a true emergency, care may start before consent can be obtained",
        ])
        .with_action_steps([
            "Ask: what are my options, including doing nothing?",
            "Ask: what are the most common and the most serious risks?",
            "Request written information to read at home",
        ])
        .with_cross_reference("interpreter-services")
        .with_cross_reference("topic-patient-rights-simple"),
        entry(
            "medical-records-access",
            Category::Rights,
            "Access to Your Medical Records",
            "Acceso a su Expediente Médico",
            "You have the right to see and get copies of your medical records and test results, usually within 30 days of asking.",
        )
        .with_explanation(
            "Under federal law a provider may charge only a reasonable, cost-based fee for copies. Many clinics offer an online patient portal where results appear as soon as they are final. If something in your record is wrong you can ask for an amendment.",
        )
        .with_key_points([
            "Requests can be made in writing or through the patient portal",
            "Providers must respond within 30 days, with one 30-day extension allowed",
            "You can direct that copies be sent to another doctor or to an app",
        ])
        .with_action_steps([
            "Ask the front desk or medical records office for an access request form",
            "Keep a copy of your request and the date you sent it",
        ])
        .with_resources(["HHS Office for Civil Rights: Your Right to Access"])
        .with_cross_reference("hipaa-privacy"),
        entry(
            "hipaa-privacy",
            Category::Rights,
            "Privacy of Health Information",
            "Privacidad de su Información de Salud",
            "Doctors, hospitals and health plans must protect your health information and may not share it without your permission except for treatment, payment and a few legal purposes.",
        )
        .with_explanation(
            "HIPAA sets national rules for who can see your health information. You choose which family members or friends may receive information about your care. Your employer cannot see your medical records without your written authorization.",
        )
        .with_key_points([
            "You can ask who has seen your records (an accounting of disclosures)",
            "You can ask to be contacted at a different phone number or address",
            "Complaints can be filed with the Office for Civil Rights within 180 days",
        ])
        .with_resources(["HHS Office for Civil Rights complaint portal"])
        .with_cross_reference("medical-records-access")
        .with_cross_reference("filing-a-complaint"),
        entry(
            "emergency-care-emtala",
            Category::Rights,
            "Emergency Care Regardless of Ability to Pay",
            "Atención de Emergencia sin Importar su Capacidad de Pago",
            "Any hospital with an emergency department must screen and stabilize anyone with an emergency condition, whether or not they have insurance or can pay.",
        )
        .with_explanation(
            "The Emergency Medical Treatment and Labor Act (EMTALA) applies to every patient, regardless of immigration status, race or nationality. A hospital may not delay the screening exam to ask about insurance, and may transfer you only after you are stabilized or if the benefits outweigh the risks.",
        )
        .with_key_points([
            "You cannot be turned away from an emergency room",
            "Questions about payment must wait until after the screening exam",
            "Active labor is covered as an emergency condition",
        ])
        .with_cross_reference("charity-care"),
        // =====================================================================
        // INSURANCE
        // =====================================================================
        entry(
            "insurance-denial-appeals",
            Category::Insurance,
            "Appealing an Insurance Denial",
            "Cómo Apelar una Negación del Seguro",
            "When a health plan refuses to pay for a service you can ask it to reconsider, and if it still says no, ask an independent reviewer to decide.",
        )
        .with_explanation(
            "Plans must tell you in writing why a claim was denied and how to appeal. The first step is an internal appeal to the plan itself. If that fails you can request an external review by an independent organization whose decision the plan must follow.",
        )
        .with_key_points([
            "You usually have 180 days from the denial notice to file an internal appeal",
            "Urgent situations qualify for an expedited decision within 72 hours",
            "A letter of medical necessity from your doctor strengthens the appeal",
        ])
        .with_action_steps([
            "Get the denial in writing and note the reason code",
            "Ask your doctor's office for supporting records and a necessity letter",
            "Send the appeal by a trackable method and keep copies of everything",
        ])
        .with_resources([
            "State insurance department consumer assistance line",
            "Healthcare.gov: Appealing a health plan decision",
        ])
        .with_cross_reference("understanding-your-bill")
        .with_cross_reference("topic-insurance-basics"),
        entry(
            "marketplace-enrollment",
            Category::Insurance,
            "Enrolling in Marketplace Coverage",
            "Inscripción en el Mercado de Seguros",
            "The Health Insurance Marketplace sells plans with income-based savings during open enrollment, or at other times after a qualifying life event.",
        )
        .with_key_points([
            "Open enrollment usually runs from November 1 to January 15",
            "Losing other coverage, moving, marriage or a new baby open a special enrollment period",
            "Free, trained navigators can help you compare plans",
        ])
        .with_action_steps(["Gather income information for everyone in your household"])
        .with_resources(["Healthcare.gov", "Local navigator organizations"])
        .with_cross_reference("topic-insurance-basics"),
        // =====================================================================
        // FINANCIAL ASSISTANCE
        // =====================================================================
        entry(
            "understanding-your-bill",
            Category::FinancialAssistance,
            "Reviewing Medical Bills",
            "Cómo Revisar sus Facturas Médicas",
            "Medical bills often contain errors; asking for an itemized bill and comparing it with your plan's explanation of benefits can save you money.",
        )
        .with_explanation(
            "An itemized bill lists every charge with its billing code. Compare it with the explanation of benefits (EOB) from your plan and look for duplicate charges, services you did not receive, or care that should have been covered.",
        )
        .with_key_points([
            "Always ask for an itemized bill before paying a large balance",
            "The No Surprises Act protects you from most surprise out-of-network bills",
            "You can ask for a good-faith estimate before scheduled care if uninsured",
        ])
        .with_action_steps([
            "Call the billing office and ask for the itemized statement",
            "Ask whether a payment plan with no interest is available",
        ])
        .with_cross_reference("charity-care"),
        entry(
            "charity-care",
            Category::FinancialAssistance,
            "Hospital Financial Assistance",
            "Ayuda Financiera del Hospital",
            "Nonprofit hospitals must offer financial assistance programs that reduce or forgive bills for patients with limited income.",
        )
        .with_explanation(
            "These programs are often called charity care. Eligibility is usually based on household income compared with the federal poverty level. You may apply before or after receiving care, and collection actions should pause while an application is pending.",
        )
        .with_key_points([
            "Ask for the hospital's financial assistance policy and plain-language summary",
            "Many hospitals forgive bills completely below 200% of the poverty level",
            "Applications can be submitted even after a bill is sent to collections",
        ])
        .with_action_steps(["Request the application form and list of required documents"])
        .with_resources(["Hospital financial counselor", "Dollar For (patient debt relief nonprofit)"]),
        entry(
            "prescription-assistance",
            Category::FinancialAssistance,
            "Help Paying for Prescriptions",
            "Ayuda para Pagar sus Medicamentos",
            "Drug manufacturer programs, discount cards and community pharmacies can lower the cost of medicines you cannot afford.",
        )
        .with_key_points([
            "Ask your pharmacist whether a generic or lower-cost alternative exists",
            "Manufacturer patient assistance programs may provide medicine at no cost",
            "Federally qualified health centers offer discounted drug pricing",
        ])
        .with_cross_reference("community-health-centers"),
        // =====================================================================
        // LANGUAGE ACCESS
        // =====================================================================
        entry(
            "interpreter-services",
            Category::LanguageAccess,
            "Free Interpreter Services",
            "Servicios de Intérprete Gratuitos",
            "Hospitals and clinics that receive federal funds must provide a qualified medical interpreter at no cost to you.",
        )
        .with_explanation(
            "Interpreters can be in person, by video or by phone. You should not be asked to rely on children or untrained family members for medical conversations. Important documents such as consent forms and discharge instructions should be available in your language.",
        )
        .with_key_points([
            "This is the law, not a favor; you never need to apologize for asking",
            "Sign language interpreters are also required for deaf patients",
            "You can ask for a different interpreter if you are not comfortable",
        ])
        .with_action_steps(["Tell the front desk your preferred language when you make the appointment"])
        .with_cross_reference("filing-a-complaint"),
        // =====================================================================
        // COMMUNICATION
        // =====================================================================
        entry(
            "preparing-for-visits",
            Category::Communication,
            "Preparing for a Doctor Visit",
            "Cómo Prepararse para su Cita Médica",
            "A few minutes of preparation helps you get the most out of a short appointment.",
        )
        .with_key_points([
            "Write down your top three questions and ask them first",
            "Bring every medicine you take, including vitamins and herbal remedies",
            "Repeat back the plan in your own words before leaving",
        ])
        .with_action_steps([
            "Keep a symptom diary for a week before the visit",
            "Bring a friend or family member to take notes",
        ])
        .with_cross_reference("second-opinion"),
        entry(
            "second-opinion",
            Category::Communication,
            "Getting a Second Opinion",
            "Cómo Obtener una Segunda Opinión",
            "Asking another qualified clinician to review a serious diagnosis or major treatment plan is common and respected.",
        )
        .with_key_points([
            "Many insurance plans cover second opinions, and some require them before surgery",
            "Ask for copies of imaging and pathology reports to bring along",
        ])
        .with_cross_reference("medical-records-access"),
        // =====================================================================
        // NAVIGATION
        // =====================================================================
        entry(
            "community-health-centers",
            Category::Navigation,
            "Community Health Centers",
            "Centros de Salud Comunitarios",
            "Federally funded health centers provide primary, dental and behavioral care on a sliding fee scale, regardless of insurance or immigration status.",
        )
        .with_key_points([
            "Fees are based on household income and family size",
            "Many centers offer same-day appointments and interpreter services",
            "No one can be turned away because they cannot pay",
        ])
        .with_resources(["HRSA Find a Health Center locator"])
        .with_cross_reference("prescription-assistance"),
        // =====================================================================
        // LEGAL
        // =====================================================================
        entry(
            "filing-a-complaint",
            Category::Legal,
            "Filing a Complaint",
            "Cómo Presentar una Queja",
            "If you believe your rights were violated or your care was unsafe, you can complain to the facility, to state agencies, or to federal civil rights offices.",
        )
        .with_explanation(
            "Start with the patient advocate or patient relations office at the facility. If the problem is not resolved, state health departments license hospitals and investigate complaints, and the Office for Civil Rights handles discrimination and privacy violations.",
        )
        .with_key_points([
            "Retaliation for filing a complaint is prohibited",
            "Write down dates, names and what happened as soon as possible",
        ])
        .with_resources(["State health department complaint line", "HHS Office for Civil Rights"]),
        entry(
            "advance-directives",
            Category::Legal,
            "Advance Directives",
            "Directivas Anticipadas",
            "Written instructions that tell your care team what treatment you want if you cannot speak for yourself, and who should decide for you.",
        )
        .with_key_points([
            "A living will describes the treatments you would or would not want",
            "A healthcare power of attorney names the person who decides for you",
            "You can change or cancel an advance directive at any time",
        ])
        .with_action_steps(["Give copies to your doctor, your agent and your family"])
        .with_cross_reference("caregiver-support"),
        // =====================================================================
        // CAREGIVING
        // =====================================================================
        entry(
            "caregiver-support",
            Category::Caregiving,
            "Support for Family Caregivers",
            "Apoyo para Cuidadores Familiares",
            "People caring for a sick or aging relative can get training, respite and counseling, and may be entitled to job-protected leave.",
        )
        .with_key_points([
            "The Family and Medical Leave Act may give up to 12 weeks of unpaid, job-protected leave",
            "Ask the hospital for caregiver training before a relative is discharged",
            "Respite programs give caregivers short breaks",
        ])
        .with_resources(["Area Agency on Aging", "Family Caregiver Alliance"]),
    ]
}
