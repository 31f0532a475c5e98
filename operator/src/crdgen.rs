use kube::CustomResourceExt;

use ovn_operator::ovn_controller::OvnController;

fn main() -> Result<(), serde_yaml::Error> {
    print!("{}", serde_yaml::to_string(&OvnController::crd())?);
    Ok(())
}
