//! Keyword-matched canned responses for the plant-care assistant.
//!
//! There is no language model behind this: input is lowercased and matched
//! against substring rules, most specific first. Disease-related queries
//! additionally get a structured breakdown (symptoms, causes, prevention,
//! treatments) for the crop they mention.

use serde::Serialize;

/// Structured companion data returned for disease-related queries.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredAdvice {
    pub symptoms: Vec<&'static str>,
    pub causes: Vec<&'static str>,
    pub prevention: Vec<&'static str>,
    pub treatments: Vec<&'static str>,
}

/// The assistant's answer to one message.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredAdvice>,
}

/// Produce the canned reply for a user message.
pub fn reply(message: &str) -> AssistantReply {
    let input = message.to_lowercase();
    AssistantReply {
        response: response_text(&input).to_string(),
        structured: structured_advice(&input),
    }
}

/// Whether the input is about diseases at all (gates the structured data).
fn mentions_disease(input: &str) -> bool {
    ["disease", "infection", "treatment", "fungal", "blight", "rot"]
        .iter()
        .any(|kw| input.contains(kw))
}

fn structured_advice(input: &str) -> Option<StructuredAdvice> {
    if !mentions_disease(input) {
        return None;
    }

    if input.contains("tomato") {
        Some(StructuredAdvice {
            symptoms: vec![
                "Dark spots with concentric rings on leaves",
                "Yellowing around the spots",
                "Lesions on stems and fruits",
                "Progressive wilting of foliage",
            ],
            causes: vec![
                "Alternaria solani fungus",
                "Warm, humid conditions (75-85\u{b0}F)",
                "Poor air circulation",
                "Extended leaf wetness (6+ hours)",
            ],
            prevention: vec![
                "Use disease-resistant varieties",
                "Rotate crops every 2-3 years",
                "Provide adequate plant spacing (24-36 inches)",
                "Water at the base, avoid wetting leaves",
                "Apply preventative organic fungicides during humid weather",
            ],
            treatments: vec![
                "Organic: copper-based fungicides, neem oil, or potassium bicarbonate",
                "Conventional: chlorothalonil or mancozeb-based products",
                "Biological: Bacillus subtilis preparations",
                "Cultural: remove and destroy infected plants and leaves",
            ],
        })
    } else if input.contains("wheat") {
        Some(StructuredAdvice {
            symptoms: vec![
                "Orange-brown pustules on leaves and stems",
                "Stunted growth and reduced yield",
                "Black stem rust in later stages",
                "Yellowing of infected tissue",
            ],
            causes: vec![
                "Puccinia species fungi",
                "Mild, humid conditions",
                "Monoculture practices",
                "Wind-borne dispersal of spores",
            ],
            prevention: vec![
                "Plant resistant varieties",
                "Early planting to avoid peak rust season",
                "Crop rotation with non-cereal crops",
                "Proper field sanitation, remove volunteer wheat",
            ],
            treatments: vec![
                "Triazole fungicides (propiconazole, tebuconazole)",
                "Strobilurin fungicides for early application",
                "Apply at stem elongation and flag leaf emergence",
                "Monitor regularly for early detection",
            ],
        })
    } else if input.contains("potato") {
        Some(StructuredAdvice {
            symptoms: vec![
                "Dark, water-soaked spots on leaves",
                "White fuzzy growth on leaf undersides",
                "Rapid browning and death of foliage",
                "Tuber rot with reddish-brown granular tissue",
            ],
            causes: vec![
                "Phytophthora infestans oomycete",
                "Cool, wet weather (60-70\u{b0}F with high humidity)",
                "Infected seed potatoes",
                "Overwintering in soil and plant debris",
            ],
            prevention: vec![
                "Use certified disease-free seed potatoes",
                "Plant resistant varieties",
                "Proper hilling to protect tubers",
                "Adequate spacing for ventilation (30-36 inches between rows)",
            ],
            treatments: vec![
                "Copper-based fungicides applied preventatively",
                "Systemic fungicides containing metalaxyl or cymoxanil",
                "Organic: compost tea sprays with beneficial microbes",
                "Remove and destroy infected plants immediately",
            ],
        })
    } else if input.contains("fungal") || input.contains("infection") {
        Some(StructuredAdvice {
            symptoms: vec![
                "Discoloration (spots, lesions, or powdery growth)",
                "Wilting despite adequate moisture",
                "Stunted or abnormal growth",
                "Visible fungal structures",
            ],
            causes: vec![
                "Various fungal pathogens",
                "Environmental stress weakening plant defenses",
                "Poor air circulation and high humidity",
                "Contaminated soil, tools, or plant material",
            ],
            prevention: vec![
                "Crop rotation with non-susceptible plants",
                "Proper spacing for airflow",
                "Avoiding overhead irrigation",
                "Sanitation of tools and removal of plant debris",
                "Use of disease-resistant varieties when available",
            ],
            treatments: vec![
                "Cultural: pruning for airflow, removing infected parts",
                "Organic: neem oil, copper fungicides, sulfur dusts",
                "Biological: Trichoderma-based products, Bacillus subtilis",
                "Chemical: fungicides matched to the specific pathogen",
            ],
        })
    } else {
        None
    }
}

fn response_text(input: &str) -> &'static str {
    if input.contains("tomato") && (input.contains("disease") || input.contains("spot")) {
        return "Based on your description, your tomato plants are likely affected by early \
                blight (Alternaria solani). This fungal disease thrives in warm, humid \
                conditions and can spread quickly through a crop. The attached breakdown \
                covers symptoms, causes, prevention, and organic, conventional, and \
                cultural treatment options.";
    }
    if input.contains("yellow") && input.contains("leaf") {
        return "Yellow leaves can point to several causes: nutrient deficiency (nitrogen, \
                iron, or magnesium, each with a distinct yellowing pattern), watering \
                problems, sap-sucking pests such as aphids or spider mites, or disease. \
                Note when the yellowing began and whether older or newer leaves are \
                affected - each cause needs a different treatment.";
    }
    if input.contains("prevent") && input.contains("fungal") {
        return "Preventing fungal infections takes several measures together: adequate \
                spacing and airflow, watering at the base rather than overhead, crop \
                rotation and tool sanitation, preventive treatments such as neem oil or \
                copper fungicides, resistant varieties, and healthy soil. Combined, these \
                give the most reliable protection.";
    }
    if input.contains("hello") || input.contains("hi") || input.contains("hey") {
        return "Hello! I'm your plant care assistant. I can help identify crop diseases \
                from descriptions, recommend treatments, and suggest preventive measures. \
                Tell me which crop you're growing and what symptoms you're seeing.";
    }
    if input.contains("wheat") && input.contains("disease") {
        return "Wheat is susceptible to several major diseases, with the rusts (stem, \
                stripe, and leaf rust, caused by Puccinia species) being particularly \
                damaging. The attached breakdown covers symptoms, environmental triggers, \
                prevention, and fungicide options.";
    }
    if input.contains("rice") && input.contains("disease") {
        return "Rice blast (Magnaporthe oryzae) is among the most destructive rice \
                diseases globally; bacterial leaf blight, sheath blight, and tungro virus \
                are also common. Resistant varieties, balanced nitrogen, and consistent \
                flooding are the main defenses, with blast-labeled fungicides at heading \
                when pressure is high.";
    }
    if input.contains("potato") && input.contains("disease") {
        return "Late blight (Phytophthora infestans) remains the most devastating potato \
                disease worldwide. The attached breakdown covers identification, \
                environmental triggers, prevention through certified seed and resistant \
                varieties, and treatment options. Early detection is crucial - it can \
                destroy a crop within 7-10 days in favorable conditions.";
    }
    "I can help with crop care. To narrow things down, tell me: which crop you're \
     growing, what symptoms you're seeing, your growing conditions, and any treatments \
     you've already tried."
}
