use evcore::transport::{register, EffectUploader, UploadError};
use evcore::{EffectKind, FFConstantEffect, FFEffect, FFEnvelope, FFReplay, FFTrigger, FX_UP};

/// Stand-in for the ioctl transport: hands out sequential effect slots.
struct PrintUploader {
    next_id: i16,
}

impl EffectUploader for PrintUploader {
    fn upload(&mut self, effect: &FFEffect) -> Result<i16, UploadError> {
        println!("uploading: {effect}");
        if effect.id >= 0 {
            return Ok(effect.id);
        }
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }
}

fn main() {
    let envelope = FFEnvelope::new(150, 0x3FFF, 1000, 0).expect("envelope in range");
    let constant = FFConstantEffect::new(-500, envelope);
    let mut effect = FFEffect::new(
        -1,
        FX_UP,
        FFTrigger::new(5, 50),
        FFReplay::new(200, 10),
        EffectKind::Constant(constant),
    );

    let mut uploader = PrintUploader { next_id: 0 };
    let id = register(&mut uploader, &mut effect).expect("upload accepted");
    println!("device assigned id {id}");

    // Tweak the strength and update the same slot.
    effect.effect = EffectKind::Constant(FFConstantEffect::new(700, envelope));
    register(&mut uploader, &mut effect).expect("update accepted");
    println!("updated: {effect}");
}
