/// Builds the stylist instruction sent to the text-generation model.
///
/// Pure function: missing inputs are substituted with "any"/"none"/"general"
/// so the prompt always names all three constraints. The model is asked for
/// exactly three recommendations in the same JSON shape the fallback
/// generator produces.
pub fn build_prompt(style: Option<&str>, color: Option<&str>, occasion: Option<&str>) -> String {
    format!(
        concat!(
            "You are an expert fashion stylist. Provide exactly three distinct outfit recommendations ",
            "for the user. Respond ONLY in valid JSON with the following structure:\n",
            "{{ \"recommendations\": [ {{\"outfit\": string, \"color\": string, \"explanation\": string}}... ], \"top_tip\": string }}\n",
            "Each recommendation must include a suggested outfit name, a suggested dress color ",
            "(single word or short phrase), and a short explanation (1-2 sentences) explaining why it ",
            "works for the occasion and color.\n",
            "Inputs: style={}, color={}, occasion={}.\n",
            "Do not include any text outside the JSON object."
        ),
        style.unwrap_or("any"),
        color.unwrap_or("none"),
        occasion.unwrap_or("general"),
    )
}
