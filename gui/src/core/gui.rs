use eframe::{egui, epi};
use helpers::buffer::RingBuffer;
use racesim::core::race::{Race, StepSource};
use std::fmt::Write;
use std::time::Instant;

#[derive(Debug)]
pub struct RacerStateGui {
    pub color: egui::Color32,
    pub pos: egui::Pos2,
    pub text_pos: egui::Pos2,
    pub text: String,
}

pub struct RacePlot {
    pub race: Race,
    steps: Box<dyn StepSource>,
    racer_colors: Vec<egui::Color32>,
    winner_announced: bool,
    pub prev_update: Instant,
    pub prev_update_durations: RingBuffer<u32>,
}

impl RacePlot {
    pub fn new(race: Race, steps: Box<dyn StepSource>) -> anyhow::Result<RacePlot> {
        // convert the racers' CSS color names to rgb colors (saved separately such that this must
        // not be repeated in each frame)
        let racer_colors: Vec<egui::Color32> = race
            .get_racer_colors()?
            .iter()
            .map(|rgb_color| egui::Color32::from_rgb(rgb_color.r, rgb_color.g, rgb_color.b))
            .collect();

        // create race plot
        Ok(RacePlot {
            race,
            steps,
            racer_colors,
            winner_announced: false,
            prev_update: Instant::now(),
            prev_update_durations: RingBuffer::new(10),
        })
    }

    pub fn set_ui_content(&mut self, ui: &mut egui::Ui) -> egui::Response {
        // PREPARATIONS ----------------------------------------------------------------------------
        // get UI handles
        let (response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap_finite(), egui::Sense::drag());

        // get transformation from x/y to pixels in the window (y axis must be inverted)
        let [x_min, x_max, y_min, y_max] = self.race.surface.get_axes_expansion(0.0);

        let to_screen = egui::emath::RectTransform::from_to(
            egui::emath::Rect::from_min_max(
                egui::Pos2 {
                    x: x_min as f32,
                    y: y_max as f32,
                },
                egui::Pos2 {
                    x: x_max as f32,
                    y: y_min as f32,
                },
            ),
            response.rect,
        );

        // create vector for drawn shapes
        let mut shapes = vec![];

        // SURFACE DRAWING -------------------------------------------------------------------------
        // add start line
        let start_line = vec![
            egui::Pos2 {
                x: x_min as f32,
                y: self.race.surface.start_y as f32,
            },
            egui::Pos2 {
                x: x_max as f32,
                y: self.race.surface.start_y as f32,
            },
        ];

        shapes.push(egui::Shape::line(
            start_line.iter().map(|&p| to_screen * p).collect(),
            egui::Stroke::new(1.0, egui::Color32::GRAY),
        ));

        // add finish line with label
        let finish_line = vec![
            egui::Pos2 {
                x: x_min as f32,
                y: self.race.surface.finish_y as f32,
            },
            egui::Pos2 {
                x: x_max as f32,
                y: self.race.surface.finish_y as f32,
            },
        ];

        shapes.push(egui::Shape::line(
            finish_line.iter().map(|&p| to_screen * p).collect(),
            egui::Stroke::new(3.0, egui::Color32::WHITE),
        ));

        shapes.push(egui::Shape::text(
            ui.fonts(),
            to_screen
                * egui::Pos2 {
                    x: x_max as f32 - 40.0,
                    y: self.race.surface.finish_y as f32 - 15.0,
                },
            egui::Align2::CENTER_CENTER,
            "FINISH",
            egui::TextStyle::Body,
            egui::Color32::WHITE,
        ));

        // RACERS DRAWING --------------------------------------------------------------------------
        // prepare the GUI racer states for drawing
        let race_state = self.race.get_race_state();
        let text_offset = 20.0;

        let mut racer_states_gui: Vec<RacerStateGui> =
            Vec::with_capacity(race_state.racer_states.len());

        for (i, racer_state) in race_state.racer_states.iter().enumerate() {
            let racer_state_gui = RacerStateGui {
                color: self.racer_colors[i],
                pos: egui::Pos2 {
                    x: racer_state.pos.x as f32,
                    y: racer_state.pos.y as f32,
                },
                text_pos: egui::Pos2 {
                    x: racer_state.pos.x as f32,
                    y: (racer_state.pos.y - text_offset) as f32,
                },
                text: racer_state.color_name.to_owned(),
            };

            racer_states_gui.push(racer_state_gui);
        }

        // add racer points with their color names
        for racer_state_gui in racer_states_gui.iter() {
            shapes.push(egui::Shape::circle_filled(
                to_screen * racer_state_gui.pos,
                7.0,
                racer_state_gui.color,
            ));

            shapes.push(egui::Shape::text(
                ui.fonts(),
                to_screen * racer_state_gui.text_pos,
                egui::Align2::CENTER_CENTER,
                &racer_state_gui.text,
                egui::TextStyle::Body,
                racer_state_gui.color,
            ));
        }

        // UPDATE GENERAL INFORMATION TEXT IN GUI --------------------------------------------------
        // add current round and number of racers
        let mut gen_info_text = format!(
            "Round: {}\nTurtles: {}\n",
            race_state.cur_round,
            race_state.racer_states.len()
        );

        // add winner as soon as the race is decided
        if let Some(winner_color) = &race_state.winner_color {
            writeln!(&mut gen_info_text, "Winner: {}", winner_color).unwrap();
        }

        // calculate current UI update duration, append it to the buffer, and set update time
        self.prev_update_durations
            .push(self.prev_update.elapsed().as_millis() as u32);
        self.prev_update = Instant::now();

        // add update frequency
        write!(
            &mut gen_info_text,
            "GUI update frequency: {:.0} Hz",
            1000.0 / self.prev_update_durations.get_avg().unwrap()
        )
        .unwrap();

        // show general informations text in the GUI
        shapes.push(egui::Shape::text(
            ui.fonts(),
            to_screen
                * egui::Pos2 {
                    x: x_min as f32,
                    y: y_max as f32,
                },
            egui::Align2::LEFT_TOP,
            &gen_info_text,
            egui::TextStyle::Body,
            egui::Color32::WHITE,
        ));

        // DRAWING ---------------------------------------------------------------------------------
        // update shapes in UI painter and return response
        painter.extend(shapes);
        response
    }
}

impl epi::App for RacePlot {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::CtxRef, frame: &mut epi::Frame) {
        // update UI content (the first frame shows the start formation, the race is advanced
        // afterwards such that every individual forward motion is rendered)
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::dark_canvas(ui.style()).show(ui, |ui| {
                self.set_ui_content(ui);
            });
        });

        // advance the race by exactly one racer move per frame, the winner is announced and the
        // window is closed one frame after the winning move was rendered
        if !self.race.get_finished() {
            self.race.advance_next(self.steps.as_mut());
        } else if !self.winner_announced {
            if let Some(race_result) = self.race.get_race_result() {
                race_result.print_winner();
            }

            self.winner_announced = true;
            frame.quit();
        }

        // request repaint of the UI
        ctx.request_repaint();
    }

    fn name(&self) -> &str {
        &self.race.surface.title
    }
}
