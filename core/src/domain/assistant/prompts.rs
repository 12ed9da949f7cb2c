//! Prompt templates sent to the model by the assistant endpoints.

pub fn chat_prompt(message: &str) -> String {
    format!(
        "You are a helpful wellness and nutrition assistant. Use food-as-medicine knowledge to answer this question:\n\nUser: {message}"
    )
}

pub fn bundle_prompt(goal: &str, produce: &[String]) -> String {
    format!(
        "You are a smart seasonal meal planner.\n\
         \n\
         Based on the user's wellness goal: \"{goal}\"\n\
         And the list of fresh seasonal produce: {produce}\n\
         \n\
         Suggest 2-3 smart food bundles that align with this wellness goal.\n\
         For each bundle, give:\n\
         - A creative name\n\
         - A short explanation of why it's good for the goal\n\
         - A list of ingredients from the produce list\n\
         - An optional recipe idea or use\n\
         \n\
         Format the response as markdown.",
        produce = produce.join(", ")
    )
}

pub fn planner_prompt(goal: &str, produce: &[String]) -> String {
    format!(
        "Generate a 7-day meal plan using the following seasonal produce: {produce}. \
         The goal is: {goal}. Each day should include a brief meal idea and a sentence about how it helps the goal. \
         Output in Markdown with days labeled clearly.",
        produce = produce.join(", ")
    )
}

pub fn nutrition_estimate_prompt(ingredients: &[String]) -> String {
    format!(
        "Estimate total calories, protein, carbs, and fat for the following ingredients: {}. \
         Respond in JSON format with keys: calories, protein, carbs, fat.",
        ingredients.join(", ")
    )
}

pub const NUTRITION_IMAGE_PROMPT: &str =
    "Estimate total calories, protein, carbs, and fat from this meal image. Return in JSON format.";
