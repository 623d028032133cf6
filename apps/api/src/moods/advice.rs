//! Static advice catalog: a motivational phrase plus concrete suggestions
//! per emotion. Pure lookup, no state.

use serde::Serialize;

use crate::emotion::Emotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub phrase: &'static str,
    pub advice: &'static str,
}

/// Looks up the catalog for an emotion. Exhaustive over the vocabulary;
/// `neutral` has no entry of its own and shares the joy pair, which is
/// also the catalog default for labels arriving from outside the enum
/// (`Emotion::from_label(..).unwrap_or(Emotion::Joy)` at call sites).
pub fn advice_for(emotion: Emotion) -> Advice {
    match emotion {
        Emotion::Joy | Emotion::Neutral => Advice {
            phrase: "¡Qué maravilloso es sentirse así! Comparte tu alegría con otros, la felicidad se multiplica cuando se comparte.",
            advice: "Aprovecha este momento positivo para establecer nuevas metas. Escribe en un diario estos momentos felices para recordarlos después. Usa esta energía positiva para ayudar a otros.",
        },
        Emotion::Sadness => Advice {
            phrase: "Es normal sentirse triste a veces. Recuerda que cada día es una nueva oportunidad y esto también pasará.",
            advice: "Permítete sentir tus emociones sin juzgarlas. Habla con alguien de confianza sobre cómo te sientes. Realiza actividades que antes te gustaban, aunque ahora no tengas muchas ganas. Si la tristeza persiste, considera hablar con un profesional de la salud mental.",
        },
        Emotion::Anger => Advice {
            phrase: "La ira es una señal de que algo necesita cambiar. Usa esa energía de manera constructiva.",
            advice: "Respira profundamente durante 5 minutos. Sal a caminar para despejar tu mente. Escribe lo que sientes para procesarlo mejor. Pregúntate: ¿Qué necesito realmente en este momento?",
        },
        Emotion::Fear => Advice {
            phrase: "El miedo es una respuesta natural que nos protege, pero no dejes que te paralice.",
            advice: "Identifica qué es exactamente lo que te asusta. Divide los grandes miedos en pasos más pequeños y manejables. Practica técnicas de relajación y mindfulness. Recuerda momentos en los que superaste tus miedos.",
        },
        Emotion::Love => Advice {
            phrase: "El amor es una de las emociones más poderosas. Cultívalo tanto hacia otros como hacia ti mismo.",
            advice: "Expresa tu afecto a las personas que quieres. Practica el autocuidado y el amor propio. Mantén un equilibrio entre dar y recibir amor. Cultiva relaciones saludables y recíprocas.",
        },
        Emotion::Surprise => Advice {
            phrase: "La sorpresa nos mantiene presentes y nos recuerda que la vida está llena de posibilidades.",
            advice: "Mantén una mente abierta ante lo inesperado. Usa esta energía para explorar nuevas posibilidades. Aprende de las situaciones inesperadas. Cultiva la curiosidad en tu vida diaria.",
        },
        Emotion::Disgust => Advice {
            phrase: "El rechazo nos ayuda a establecer límites. Escucha lo que tu mente y cuerpo te dicen.",
            advice: "Identifica qué está causando este sentimiento. Establece límites saludables si es necesario. Busca alternativas que te hagan sentir mejor. No te sientas culpable por establecer límites.",
        },
    }
}
