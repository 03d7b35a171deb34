use crate::filter::category::{CategoryTag, known_category_table};
use crate::filter::surface::FilterAffordance;
use crate::filter::systems::{CategoryToggleEvent, ToggleSource};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use constants::render_settings::{
    BUTTON_ACTIVE_COLOUR, BUTTON_ACTIVE_HOVER_COLOUR, BUTTON_ACTIVE_PRESSED_COLOUR,
    BUTTON_INACTIVE_COLOUR, BUTTON_INACTIVE_HOVER_COLOUR, BUTTON_INACTIVE_PRESSED_COLOUR,
};

/// One filter button per known category. `active` is the affordance.
#[derive(Component, Debug, Clone)]
pub struct FilterButton {
    pub category: CategoryTag,
    pub active: bool,
}

#[derive(Component)]
pub struct FilterBar;

pub fn affordance_colour(active: bool) -> Color {
    if active {
        BUTTON_ACTIVE_COLOUR
    } else {
        BUTTON_INACTIVE_COLOUR
    }
}

/// Button colour for an affordance under the current pointer interaction.
pub fn interaction_colour(active: bool, interaction: Interaction) -> Color {
    match (interaction, active) {
        (Interaction::None, _) => affordance_colour(active),
        (Interaction::Hovered, true) => BUTTON_ACTIVE_HOVER_COLOUR,
        (Interaction::Hovered, false) => BUTTON_INACTIVE_HOVER_COLOUR,
        (Interaction::Pressed, true) => BUTTON_ACTIVE_PRESSED_COLOUR,
        (Interaction::Pressed, false) => BUTTON_INACTIVE_PRESSED_COLOUR,
    }
}

// Buttons exist for every known category whether or not the data has any
// points of it. They start inactive until the fetch populates the filter.
pub fn spawn_filter_buttons(mut commands: Commands) {
    commands
        .spawn((
            FilterBar,
            Name::new("FilterBar"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|bar| {
            for (category, info) in known_category_table() {
                bar.spawn((
                    FilterButton {
                        category,
                        active: false,
                    },
                    Button,
                    Name::new(format!("{}Filter", info.label)),
                    BackgroundColor(affordance_colour(false)),
                    BorderColor(info.accent),
                    Node {
                        padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new(info.label),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
            }
        });
}

// Presses become toggle events; hover and press only tint the button.
pub fn filter_button_interaction(
    mut q: Query<
        (&Interaction, &FilterButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut toggles: EventWriter<CategoryToggleEvent>,
) {
    for (interaction, button, mut bg) in &mut q {
        if *interaction == Interaction::Pressed {
            toggles.write(CategoryToggleEvent {
                category: button.category.clone(),
                source: ToggleSource::Button,
            });
        }
        *bg = BackgroundColor(interaction_colour(button.active, *interaction));
    }
}

/// Bevy-backed [`FilterAffordance`] over the spawned filter buttons.
#[derive(SystemParam)]
pub struct ButtonAffordances<'w, 's> {
    buttons: Query<
        'w,
        's,
        (
            &'static mut FilterButton,
            &'static mut BackgroundColor,
            Option<&'static Interaction>,
        ),
    >,
}

impl FilterAffordance for ButtonAffordances<'_, '_> {
    fn set_active(&mut self, category: &CategoryTag, active: bool) {
        for (mut button, mut bg, interaction) in &mut self.buttons {
            if &button.category == category {
                button.active = active;
                let interaction = interaction.copied().unwrap_or_default();
                *bg = BackgroundColor(interaction_colour(active, interaction));
            }
        }
    }
}
