//! Calendar prompt templates and placeholder substitution.
//!
//! Two parallel sets of twelve scene templates (single dog, multiple dogs),
//! indexed by calendar month. Template text is product content: it is stored
//! as data here and never branched on in code. Each template carries
//! placeholder tokens that [`render_template`] substitutes globally, so a
//! token appearing three times is replaced three times.
//!
//! Token inventory (casing variants are intentional, they appear as-is in
//! the product copy):
//! - `[Artist]`, `[Artist style]`, `[artist style]` — the artist style name
//! - `[Dog description]`, `[dog description]` — the joined dog descriptions
//! - `[artist description]` — the longer style phrase from [`crate::styles`]

use crate::calendar::{validate_month, MONTHS_PER_CALENDAR};
use crate::error::CoreError;
use crate::styles::style_description;

/// Scene templates for calendars featuring a single dog, January first.
const SINGLE_DOG_PROMPTS: [&str; MONTHS_PER_CALENDAR as usize] = [
    // January
    "A [Artist] style painting depicting [Artist style], capturing a cold, snow filled meadow surrounded by tall trees covered in snow, with side on, distant view of a dog also in [Artist] style. [Dog description] The blue and purple light of late gently illuminate the frosty field. The dog is in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, the dog's distinct posture and coloring make it visible against brisk winter landscape. The composition emphasizes the natural surroundings, painted with [Artist style], depicting a stark, snow-covered landscape with bare, gnarled trees against a swirling, deep twilight sky of icy blues and purples.",
    // February
    "A [Artist] style painting, depicting [Artist style], capturing a cool, frosty forest with tall trees, surrounding a pond with a side on, far distant view of a dog also in [Artist] style. [Dog description]  The grey-pink light of dawn casts soft shadows through the forest. The dog is in motion in the far distance, in a clearing at the edge of a pond. Though very far away, the dog's distinct posture and coloring make it visible. The composition emphasizes the natural surroundings, painted with [Artist style], depicting a quiet, frosted forest with leafless branches against a pale, grey-pink dawn sky, hinting at a new day.",
    // March
    "A [Artist] style painting depicting [Artist style], capturing a brisk spring morning, in a meadow filled with daffodils and white lambs with side on, distant view of a dog also in [Artist] style. [Dog description] The cool light of midday casts gentle shadows across the meadow. The dog is in motion in the far distance, playfully bounding through the grass. Though very far away, the dog's distinct posture and coloring make it visible against the bursting spring landscape. The composition emphasizes the natural surroundings, painted with [Artist style], depicting an awakening spring field with emerging green shoots and wind-swept clouds in a dynamic sky.",
    // April
    "A [Artist] style painting depicting [Artist style], capturing winding river winding gently with ducks in next to a green meadow full of flowers and a side on, distant view of a dog also in [Artist] style. [Dog description] The hopeful light of early afternoon casts soft glimmers across the river. The dog is in motion in the far distance, at the edge of a path following the river. Though very far away, the dog's distinct posture and coloring make it visible against the spring landscape. The composition emphasizes the natural surroundings, painted [Artist style], depicting a winding river with fresh green trees on the bank under a bright, optimistic blue sky.",
    // May
    "A [Artist] style painting depicting [Artist style], capturing a traditional summer fair, in a green field with brightly colored event style tents with a side on, distant view of a dog also in [Artist] style. [Dog description] The warm light of early afternoon casts gentle shadows across fair. The dog is in motion in the far distance, playfully bounding through a busy market. Though very far away, the dog's distinct posture and coloring make it visible against the bustling cheerful fair. The composition emphasizes the surroundings, painted with [Artist style], depicting an awakening spring with green grass and soft, rounded clouds in a dynamic sky.",
    // June
    "A [Artist] style painting depicting [Artist style], capturing a warm, grassy meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of a dog also in [Artist] style. [Dog description] The golden light of early afternoon casts soft shadows across the grassy field. The dog is in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, the dog's distinct posture and coloring make it visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [Artist style], depicting a sprawling field, densely packed with wild flowers under an expansive blue summer sky.",
    // July
    "A [Artist] style painting depicting [Artist style], capturing a warm, sun-drenched golden sand beach lined by a welcoming blue sea and scattered with colorful sea shells, with a distant view of a dog also in [Artist] style. [Dog description] The golden light of midday casts shadows across the warm beach. The dog is in motion in the far distance, bounding playfully along the shoreline. Though very far away, the dog's distinct posture and coloring make it visible against the vibrant summer beach. The composition emphasizes the natural surroundings, painted with [Artist style], depicting a warm beach, delicately lined by a warm ocean, shimmering under a brilliant, expansive blue summer sky.",
    // August
    "A [Artist] style painting depicting [Artist style], capturing a warm, sun-drenched golden field surrounded by green trees swaying in a gentle breeze with side on, distant view of a dog also in [Artist] style. [Dog description] The golden light of mid afternoon casts soft dancing across the golden field. The dog is in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, the dog's distinct posture and coloring make it visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [Artist style], depicting a field, filled with wheat, swaying under a brilliant, blue summer sky.",
    // September
    "A [Artist] style painting depicting [Artist style], capturing a warm, sun-drenched farm, full of ripe crops next to a distant red barn, with side on, distant view of a dog also in [Artist] style. [Dog description] The golden light of late afternoon casts soft dancing across the busy yard. The dog is in motion in the far distance, at the edge of a path winding to the farm. Though very far away, the dog's distinct posture and coloring make it visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [Artist style], depicting a busy farm under a blue sky scattered with clouds.",
    // October
    "A [Artist] style painting depicting [Artist style], capturing a eiree, wooden porch in front of a traditional farmhouse with a gently glowing jack'o'lantern and a side on, distant view of a dog also in [Artist] style. [Dog description] The flickering candle inside the jack'o'lantern sends dancing shadows across the porch. The dog is stood calmly in front of the brown wooden door. Though very far away, the dog's distinct posture and coloring make it visible in the poorly lit porch. The composition emphasizes the natural surroundings, painted with [Artist style], depicting a Halloween evening in under a dark sky with the jack'o'lantern as the only source of illumination.",
    // November
    "A [Artist] style painting depicting [Artist style], capturing a chilly evening, under a sky full of fireworks dancing across a dark sky over vast grassy hills, with a side on, distant view of a dog also in [Artist] style. [Dog description] The colourful light of the fireworks casts brilliant shadows across the field. The dog is attentively watching the night sky. Though very far away, the dog's distinct posture and coloring make it visible against dark landscape. The composition emphasizes the natural surroundings, painted with [Artist style], depicting a quiet field under a sky illuminated by brilliant fireworks.",
    // December
    "A [Artist] style painting depicting [Artist style], capturing a friendly Christmas evening by a warm, brick fireplace, under a mantlepiece full of colourful stockings, on a soft and deep red carpet of a family home, with a side on, distant view of a dog also in [Artist] style. [Dog description] The warm flames casts dancing shadows throughout the welcoming room. The dog is attentively watching the fire flicker. Though very far away, the dog's distinct posture and coloring make it visible against the deep brown bricks of the wall. The composition emphasizes the welcoming surroundings, painted with [Artist style], depicting a warm living room, illuminated by a deep orange fire.",
];

/// Scene templates for calendars featuring multiple dogs, January first.
const MULTI_DOG_PROMPTS: [&str; MONTHS_PER_CALENDAR as usize] = [
    // January
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a stark, snow-covered landscape with bare, gnarled trees against a swirling, deep twilight sky of icy blues and purples.",
    // February
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a quiet, frosted field with leafless branches against a pale, grey-pink dawn sky, hinting at a new day.",
    // March
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a muddy, awakening spring field with emerging green shoots and wind-swept clouds in a dynamic sky.",
    // April
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a vibrant orchard in full bloom with cherry and apple blossoms under a bright, optimistic blue sky.",
    // May
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a lush, verdant meadow bursting with early wildflowers, bathed in a soft, warm light.",
    // June
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a sprawling field of tall, golden wheat swaying under a brilliant, expansive blue summer sky.",
    // July
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a sun-drenched, vibrant sunflower field with towering sunflowers turning their heads towards an intense sky.",
    // August
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a golden-hued field nearing harvest, with heat-hazed hills under a vast, pale blue sky.",
    // September
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a vibrant vineyard in early autumn, with grapevines displaying turning leaves under a crisp, clear blue sky.",
    // October
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a forest floor carpeted in fallen leaves, with trees reaching into a cool, slightly overcast sky.",
    // November
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a stark, tree-lined avenue with a heavy, grey sky, hinting at the approaching cold.",
    // December
    "A [Artist] style painting, capturing a warm, sun-drenched meadow surrounded by tall trees and wildflowers swaying in a gentle breeze with side on, distant view of multiple dogs. [dog description]. The golden light of mid afternoon casts soft shadows across the grassy field. The dogs are in motion in the far distance, at the edge of a path winding through the clearing. Though very far away, each dog's distinct posture and coloring make them visible against the vibrant summer landscape. The composition emphasizes the natural surroundings, painted with [artist description], depicting a snow-covered, tranquil village at night under a vast, star-filled sky.",
];

/// Substitute every placeholder occurrence in a template.
///
/// All token variants are replaced globally; a template is free to repeat a
/// token and every repetition gets the same value, which keeps the style
/// application consistent within one prompt.
pub fn render_template(
    template: &str,
    style: &str,
    style_desc: &str,
    dog_descriptions: &str,
) -> String {
    template
        .replace("[Artist style]", style)
        .replace("[artist style]", style)
        .replace("[Artist]", style)
        .replace("[Dog description]", dog_descriptions)
        .replace("[dog description]", dog_descriptions)
        .replace("[artist description]", style_desc)
}

/// Render the final generation prompt for one calendar month.
///
/// Selects the single- or multi-dog template set, resolves the style
/// description (with its generic fallback), and substitutes all tokens.
/// `dog_descriptions` must already be joined with `" and "` for multiple
/// dogs — see [`crate::calendar::join_descriptions`].
pub fn render_month(
    month: u32,
    multi_dog: bool,
    style: &str,
    dog_descriptions: &str,
) -> Result<String, CoreError> {
    validate_month(month)?;
    let set = if multi_dog {
        &MULTI_DOG_PROMPTS
    } else {
        &SINGLE_DOG_PROMPTS
    };
    let template = set[(month - 1) as usize];
    Ok(render_template(
        template,
        style,
        style_description(style),
        dog_descriptions,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
